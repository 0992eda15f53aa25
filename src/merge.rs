use std::ptr;

/// Temporary storage for [`merge`], allocated once per sort call and reused by every merge.
///
/// The inner `Vec` keeps length 0, it only ever holds shallow copies of elements still owned by
/// the slice being sorted. Nothing is dropped through it, even if the comparison panics.
pub struct ScratchBuffer<T> {
    buf: Vec<T>,
}

impl<T> ScratchBuffer<T> {
    /// Scratch space for merging within a slice of length `len`.
    pub fn new(len: usize) -> Self {
        Self {
            buf: Vec::with_capacity(len),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}

/// Merges the two adjacent sorted runs `v[left..=center]` and `v[center + 1..=right]`.
///
/// The merged sequence is built in `scratch` at the same positions, then copied back over
/// `v[left..=right]`. On ties the element from the left run is taken first, which makes the merge
/// stable.
///
/// All comparisons happen before anything is written to `v`. If `is_less` panics `v` is left
/// exactly as it was.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn merge<T, F>(
    v: &mut [T],
    scratch: &mut ScratchBuffer<T>,
    left: usize,
    center: usize,
    right: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        left <= center && center < right && right < v.len() && right < scratch.capacity(),
        "invalid merge of {left}..={center} and {}..={right} in slice of len {}",
        center + 1,
        v.len()
    );

    let v_base = v.as_mut_ptr();
    let buf_base = scratch.buf.as_mut_ptr();

    // SAFETY: The assert above guarantees that `left..=right` is in-bounds for both `v` and the
    // allocation of `scratch`. Every position of `left..=right` in `scratch` is written exactly
    // once before the copy back. `v` and `scratch` are distinct allocations, so the copies never
    // overlap.
    unsafe {
        let mut left_pos = left;
        let mut right_pos = center + 1;
        let mut out = left;

        while left_pos <= center && right_pos <= right {
            let take_right = is_less(&*v_base.add(right_pos), &*v_base.add(left_pos));
            let src = if take_right {
                right_pos += 1;
                right_pos - 1
            } else {
                left_pos += 1;
                left_pos - 1
            };

            ptr::copy_nonoverlapping(v_base.add(src), buf_base.add(out), 1);
            out += 1;
        }

        // At most one of the runs has a remainder.
        let left_rem = center + 1 - left_pos;
        ptr::copy_nonoverlapping(v_base.add(left_pos), buf_base.add(out), left_rem);
        out += left_rem;

        let right_rem = right + 1 - right_pos;
        ptr::copy_nonoverlapping(v_base.add(right_pos), buf_base.add(out), right_rem);

        ptr::copy_nonoverlapping(buf_base.add(left), v_base.add(left), right - left + 1);
    }
}
