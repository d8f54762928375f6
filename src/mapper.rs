//! One-way mapping contract between adjacent layers.
//!
//! Mappers are pure: no side effects, order-preserving over sequences.
//! A mapper that requires a field returns `None` for records missing it,
//! and `map_all` silently drops those records.

pub trait Mapper<F, T> {
    /// Map a single value. `None` means the record failed required-field
    /// validation and must be excluded from the output.
    fn map(&self, value: F) -> Option<T>;

    /// Map a sequence, preserving order and dropping invalid records.
    fn map_all(&self, values: Vec<F>) -> Vec<T> {
        values.into_iter().filter_map(|v| self.map(v)).collect()
    }
}
