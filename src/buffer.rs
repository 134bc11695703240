use std::ops::{Index, IndexMut};

/// Growable contiguous sequence whose backing storage always holds exactly
/// `len()` elements. Every growth reallocates to the exact requested length
/// and every shrink releases the freed tail, so the memory footprint tracks
/// the element count with no slack capacity.
///
/// Operations that allocate report failure through `Result` and leave the
/// buffer in its previous state when the allocation cannot be obtained.
#[derive(Debug, Default)]
pub struct Buffer<T> {
    data: Vec<T>,
}

impl<T> Buffer<T> {
    /// Creates an empty buffer without allocating.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reference to the final element, or `None` when the buffer is empty.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Releases the backing storage and resets the length to 0. Idempotent.
    pub fn clear(&mut self) {
        self.data = Vec::new();
    }

    /// Transfers the contents out, leaving this buffer empty.
    pub fn take(&mut self) -> Self {
        Self {
            data: std::mem::take(&mut self.data),
        }
    }

    /// Removes the final element. Emptying the buffer releases the backing
    /// storage entirely; on an already empty buffer this is a no-op.
    pub fn pop_back(&mut self) {
        if self.data.len() <= 1 {
            self.clear();
        } else {
            self.data.truncate(self.data.len() - 1);
            self.data.shrink_to_fit();
        }
    }
}

impl<T: Clone + Default> Buffer<T> {
    /// Creates a buffer of `len` default-valued elements. If the allocation
    /// fails the returned buffer is empty rather than partially filled.
    pub fn with_len(len: usize) -> Self {
        let mut buffer = Self::new();
        let _ = buffer.resize(len);
        buffer
    }

    /// Reallocates the backing storage to hold exactly `new_len` elements.
    /// The values at indices `0..min(old_len, new_len)` are preserved and any
    /// new tail slots are default-initialized. On allocation failure the
    /// buffer is left completely unchanged and an error is returned.
    pub fn resize(&mut self, new_len: usize) -> Result<(), String> {
        let old_len = self.data.len();
        if new_len == old_len {
            Ok(())
        } else if new_len == 0 {
            self.clear();
            Ok(())
        } else if new_len < old_len {
            self.data.truncate(new_len);
            self.data.shrink_to_fit();
            Ok(())
        } else {
            self.data
                .try_reserve_exact(new_len - old_len)
                .map_err(|e| format!("Failed to resize buffer to {} elements: {}", new_len, e))?;
            self.data.resize(new_len, T::default());
            Ok(())
        }
    }

    /// Appends `value`, growing the storage by exactly one element.
    pub fn push_back(&mut self, value: T) -> Result<(), String> {
        self.resize(self.data.len() + 1)?;
        let last = self.data.len() - 1;
        self.data[last] = value;
        Ok(())
    }
}

impl<T: Clone> Buffer<T> {
    /// Creates a buffer holding a copy of `values` in index order, sized
    /// exactly to their count. An empty buffer results if the allocation
    /// fails.
    pub fn from_slice(values: &[T]) -> Self {
        let mut buffer = Self::new();
        let _ = buffer.extend_from_slice(values);
        buffer
    }

    /// Concatenates `values` onto the end with a single reallocation for the
    /// combined length. The first `len()` elements are untouched; on failure
    /// nothing changes.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), String> {
        self.data
            .try_reserve_exact(values.len())
            .map_err(|e| {
                format!(
                    "Failed to grow buffer by {} elements: {}",
                    values.len(),
                    e
                )
            })?;
        self.data.extend_from_slice(values);
        Ok(())
    }

    /// Concatenates another buffer's values onto the end. See
    /// [`Buffer::extend_from_slice`].
    pub fn append(&mut self, other: &Buffer<T>) -> Result<(), String> {
        self.extend_from_slice(other.as_slice())
    }
}

impl<T: Clone> Clone for Buffer<T> {
    /// Deep copy into a fresh exactly-sized block; the copy shares no storage
    /// with the original.
    fn clone(&self) -> Self {
        Self::from_slice(&self.data)
    }
}

impl<T> Index<usize> for Buffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Buffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for Buffer<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl<T: Clone> From<&[T]> for Buffer<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T> From<Vec<T>> for Buffer<T> {
    fn from(mut values: Vec<T>) -> Self {
        values.shrink_to_fit();
        Self { data: values }
    }
}

impl<'a, T> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for Buffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let buffer: Buffer<f64> = Buffer::new();
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert!(buffer.last().is_none());
    }

    #[test]
    fn test_with_len_default_values() {
        let buffer: Buffer<f64> = Buffer::with_len(4);
        assert_eq!(buffer.len(), 4);
        for value in &buffer {
            assert_eq!(*value, 0.0);
        }
    }

    #[test]
    fn test_from_slice_preserves_order() {
        let buffer = Buffer::from([1.0, 2.0, 3.0]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer[0], 1.0);
        assert_eq!(buffer[1], 2.0);
        assert_eq!(buffer[2], 3.0);
        assert_eq!(buffer.last(), Some(&3.0));
    }

    #[test]
    fn test_push_pop_round_trip() {
        let mut buffer = Buffer::new();
        for i in 0..10 {
            buffer.push_back(i as f64).unwrap();
        }
        assert_eq!(buffer.len(), 10);
        for _ in 0..10 {
            buffer.pop_back();
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_pop_back_on_empty_is_noop() {
        let mut buffer: Buffer<i32> = Buffer::new();
        buffer.pop_back();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_resize_grow_preserves_prefix() {
        let mut buffer = Buffer::from([1.0, 2.0, 3.0]);
        buffer.resize(5).unwrap();
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer[0], 1.0);
        assert_eq!(buffer[1], 2.0);
        assert_eq!(buffer[2], 3.0);
        assert_eq!(buffer[3], 0.0);
        assert_eq!(buffer[4], 0.0);
    }

    #[test]
    fn test_resize_shrink_preserves_prefix() {
        let mut buffer = Buffer::from([1.0, 2.0, 3.0, 4.0]);
        buffer.resize(2).unwrap();
        assert_eq!(buffer.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_resize_to_zero_clears() {
        let mut buffer = Buffer::from([1.0, 2.0]);
        buffer.resize(0).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut buffer = Buffer::from([1.0, 2.0]);
        buffer.clear();
        assert!(buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_copy_independence() {
        let a = Buffer::from([1.0, 2.0, 3.0]);
        let mut b = a.clone();
        b[0] = 10.0;
        b.push_back(4.0).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(b.as_slice(), &[10.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_move_empties_source() {
        let mut a = Buffer::from([1.0, 2.0, 3.0]);
        let b = a.take();
        assert!(a.is_empty());
        assert_eq!(b.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_append_length_law() {
        let mut a = Buffer::from([1.0, 2.0]);
        let b = Buffer::from([3.0, 4.0, 5.0]);
        a.append(&b).unwrap();
        assert_eq!(a.len(), 5);
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(b.as_slice(), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_extend_from_slice_on_empty() {
        let mut buffer: Buffer<i32> = Buffer::new();
        buffer.extend_from_slice(&[7, 8]).unwrap();
        assert_eq!(buffer.as_slice(), &[7, 8]);
    }

    #[test]
    fn test_index_assignment() {
        let mut buffer = Buffer::from([1.0, 2.0]);
        buffer[1] = 9.0;
        assert_eq!(buffer[1], 9.0);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let buffer = Buffer::from([1.0]);
        let _ = buffer[1];
    }

    #[test]
    fn test_iteration_order() {
        let buffer = Buffer::from([1, 2, 3]);
        let collected: Vec<i32> = buffer.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_vec_drops_slack_capacity() {
        let mut source = Vec::with_capacity(100);
        source.extend_from_slice(&[1.0, 2.0]);
        let buffer = Buffer::from(source);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.as_slice(), &[1.0, 2.0]);
    }
}
