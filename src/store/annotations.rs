use super::{ordered_range, TraceStore};
use crate::engine::{u64_value, StorageEngine};
use crate::error::Result;
use crate::records::{Annotation, GLOBAL_ANNOTATION_TYPES, USER_ANNOTATION_TYPES};
use std::ops::RangeInclusive;

impl<E: StorageEngine> TraceStore<E> {
    /// Store an annotation and return its id.
    ///
    /// An annotation without an id is assigned the next free one.
    pub fn insert_annotation(&mut self, annotation: &Annotation) -> Result<u64> {
        self.insert(annotation)?;
        Ok(match annotation.annotation_id {
            Some(id) => id,
            None => self.engine.last_insert_rowid() as u64,
        })
    }

    pub fn annotations(&self) -> Result<Vec<Annotation>> {
        self.get_all()
    }

    pub fn annotation_by_id(&self, annotation_id: u64) -> Result<Annotation> {
        self.fetch_one(
            "WHERE annotationId = ?1",
            &[u64_value(annotation_id)],
            || format!("annotation {annotation_id}"),
        )
    }

    /// Annotations that lie entirely inside `[start, end]`.
    pub fn annotations_in_range(&self, start: u64, end: u64) -> Result<Vec<Annotation>> {
        let Some(bounds) = ordered_range("cpu time", start, end)? else {
            return Ok(Vec::new());
        };
        self.fetch_where(
            "WHERE cpuStartTime >= ?1 AND cpuEndTime <= ?2 ORDER BY cpuStartTime",
            &bounds,
        )
    }

    pub fn annotations_in_frame_range(&self, first: u64, last: u64) -> Result<Vec<Annotation>> {
        let Some(bounds) = ordered_range("frame", first, last)? else {
            return Ok(Vec::new());
        };
        self.fetch_where("WHERE frameNum BETWEEN ?1 AND ?2", &bounds)
    }

    /// Annotations emitted by the capture runtime.
    pub fn global_annotations(&self) -> Result<Vec<Annotation>> {
        self.annotations_of_types(GLOBAL_ANNOTATION_TYPES)
    }

    /// Annotations created by the user.
    pub fn user_annotations(&self) -> Result<Vec<Annotation>> {
        self.annotations_of_types(USER_ANNOTATION_TYPES)
    }

    fn annotations_of_types(&self, types: RangeInclusive<u64>) -> Result<Vec<Annotation>> {
        self.fetch_where(
            "WHERE annotationType BETWEEN ?1 AND ?2",
            &[u64_value(*types.start()), u64_value(*types.end())],
        )
    }

    pub fn delete_annotations(&mut self) -> Result<()> {
        self.delete_all::<Annotation>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::create_test_store;
    use super::*;

    fn annotation(kind: u64, frame: u64, start: u64, end: u64) -> Annotation {
        Annotation {
            annotation_id: None,
            frame_num: frame,
            draw_num: 0,
            annotation_type: kind,
            cpu_start_time: start,
            cpu_end_time: end,
            text: format!("marker {kind}"),
        }
    }

    #[test]
    fn test_store_assigns_ids() {
        let mut store = create_test_store();
        let first = store.insert_annotation(&annotation(1, 1, 10, 20)).unwrap();
        let second = store.insert_annotation(&annotation(2, 1, 30, 40)).unwrap();
        assert_ne!(first, second);

        let fetched = store.annotation_by_id(second).unwrap();
        assert_eq!(fetched.annotation_id, Some(second));
        assert_eq!(fetched.text, "marker 2");
    }

    #[test]
    fn test_explicit_id_round_trip() {
        let mut store = create_test_store();
        let mut explicit = annotation(3, 2, 5, 6);
        explicit.annotation_id = Some(77);
        assert_eq!(store.insert_annotation(&explicit).unwrap(), 77);
        assert_eq!(store.annotations().unwrap(), vec![explicit]);
        assert!(store.annotation_by_id(78).unwrap_err().is_not_found());
    }

    #[test]
    fn test_global_and_user_split() {
        let mut store = create_test_store();
        for kind in [0, 3, 4, 29, 30, 35, 36] {
            store.insert_annotation(&annotation(kind, 1, 0, 1)).unwrap();
        }
        let mut global: Vec<u64> = store
            .global_annotations()
            .unwrap()
            .iter()
            .map(|a| a.annotation_type)
            .collect();
        global.sort_unstable();
        assert_eq!(global, vec![30, 35]);

        let mut user: Vec<u64> = store
            .user_annotations()
            .unwrap()
            .iter()
            .map(|a| a.annotation_type)
            .collect();
        user.sort_unstable();
        assert_eq!(user, vec![0, 3]);
    }

    #[test]
    fn test_ranges() {
        let mut store = create_test_store();
        store.insert_annotation(&annotation(1, 1, 100, 150)).unwrap();
        store.insert_annotation(&annotation(1, 2, 150, 200)).unwrap();
        store.insert_annotation(&annotation(1, 3, 201, 250)).unwrap();

        assert_eq!(store.annotations_in_range(100, 200).unwrap().len(), 2);
        assert_eq!(store.annotations_in_range(101, 200).unwrap().len(), 1);
        assert_eq!(store.annotations_in_frame_range(2, 3).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_annotations() {
        let mut store = create_test_store();
        store.insert_annotation(&annotation(1, 1, 0, 1)).unwrap();
        store.delete_annotations().unwrap();
        assert!(store.annotations().unwrap().is_empty());
        // idempotent
        store.delete_annotations().unwrap();
    }
}
