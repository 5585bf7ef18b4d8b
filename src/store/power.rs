use super::{ordered_range, TraceStore};
use crate::engine::StorageEngine;
use crate::error::Result;
use crate::records::{Device, EstimatedPowerComponent, EstimatedPowerSample, GpuTimer};
use std::collections::BTreeMap;

impl<E: StorageEngine> TraceStore<E> {
    pub fn insert_estimated_power_sample(&mut self, sample: &EstimatedPowerSample) -> Result<()> {
        self.insert(sample)
    }

    pub fn estimated_power_samples(&self) -> Result<Vec<EstimatedPowerSample>> {
        self.fetch_where("ORDER BY sampleTime", &[])
    }

    pub fn insert_estimated_power_component(
        &mut self,
        component: &EstimatedPowerComponent,
    ) -> Result<()> {
        self.insert(component)
    }

    pub fn estimated_power_components(&self) -> Result<Vec<EstimatedPowerComponent>> {
        self.get_all()
    }

    /// Power components grouped by the device they belong to.
    pub fn estimated_power_components_by_device(
        &self,
    ) -> Result<BTreeMap<u64, Vec<EstimatedPowerComponent>>> {
        let mut by_device: BTreeMap<u64, Vec<EstimatedPowerComponent>> = BTreeMap::new();
        for component in self.fetch_where::<EstimatedPowerComponent>("ORDER BY componentId", &[])? {
            by_device
                .entry(component.device_id)
                .or_default()
                .push(component);
        }
        Ok(by_device)
    }

    pub fn insert_gpu_timer(&mut self, timer: &GpuTimer) -> Result<()> {
        self.insert(timer)
    }

    pub fn gpu_timers(&self) -> Result<Vec<GpuTimer>> {
        self.get_all()
    }

    pub fn gpu_timers_in_frame_range(&self, first: u64, last: u64) -> Result<Vec<GpuTimer>> {
        let Some(bounds) = ordered_range("frame", first, last)? else {
            return Ok(Vec::new());
        };
        self.fetch_where(
            "WHERE frameNum BETWEEN ?1 AND ?2 ORDER BY frameNum, drawNum",
            &bounds,
        )
    }

    pub fn insert_device(&mut self, device: &Device) -> Result<()> {
        self.insert(device)
    }

    pub fn devices(&self) -> Result<Vec<Device>> {
        self.fetch_where("ORDER BY deviceId", &[])
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::create_test_store;
    use super::*;

    fn component(device_id: u64, component_id: u64, name: &str) -> EstimatedPowerComponent {
        EstimatedPowerComponent {
            device_id,
            component_id,
            component_name: name.to_string(),
        }
    }

    #[test]
    fn test_components_grouped_by_device() {
        let mut store = create_test_store();
        store.insert_estimated_power_component(&component(2, 1, "GPU")).unwrap();
        store.insert_estimated_power_component(&component(1, 3, "DDR")).unwrap();
        store.insert_estimated_power_component(&component(1, 2, "CPU")).unwrap();

        let grouped = store.estimated_power_components_by_device().unwrap();
        assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        let names: Vec<&str> = grouped[&1]
            .iter()
            .map(|c| c.component_name.as_str())
            .collect();
        assert_eq!(names, vec!["CPU", "DDR"]);
        assert_eq!(store.estimated_power_components().unwrap().len(), 3);
    }

    #[test]
    fn test_power_samples_sorted_by_time() {
        let mut store = create_test_store();
        for time in [30, 10, 20] {
            store
                .insert_estimated_power_sample(&EstimatedPowerSample {
                    sample_time: time,
                    estimated_power: 1.25,
                    model_id: 1,
                    component_id: 2,
                    unit: "W".to_string(),
                })
                .unwrap();
        }
        let times: Vec<u64> = store
            .estimated_power_samples()
            .unwrap()
            .iter()
            .map(|s| s.sample_time)
            .collect();
        assert_eq!(times, vec![10, 20, 30]);
    }

    #[test]
    fn test_gpu_timers_in_frame_range() {
        let mut store = create_test_store();
        for frame in 1..=4 {
            store
                .insert_gpu_timer(&GpuTimer {
                    timer_type: 0,
                    frame_num: frame,
                    draw_num: 0,
                    time: frame * 100,
                })
                .unwrap();
        }
        let timers = store.gpu_timers_in_frame_range(2, 3).unwrap();
        assert_eq!(timers.iter().map(|t| t.time).collect::<Vec<_>>(), vec![200, 300]);
        assert!(store.gpu_timers_in_frame_range(3, 2).is_err());
        assert_eq!(store.gpu_timers().unwrap().len(), 4);
    }

    #[test]
    fn test_devices() {
        let mut store = create_test_store();
        let device = Device {
            device_id: 1,
            device_type_id: 4,
            device_name: "Mali-G71".to_string(),
            device_description: "GPU".to_string(),
        };
        store.insert_device(&device).unwrap();
        assert_eq!(store.devices().unwrap(), vec![device.clone()]);
        // deviceId is the key
        assert!(store.insert_device(&device).is_err());
    }
}
