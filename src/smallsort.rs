use std::mem::ManuallyDrop;
use std::ptr;

/// Sorts the closed interval `v[left..=right]` with insertion sort.
///
/// Every element is shifted left across the strictly greater elements preceding it, so equal
/// elements keep their relative order. Quadratic, only used on intervals below the cutoff and by
/// the standalone insertion sort engine.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn insertion_sort_range<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let interval = &mut v[left..=right];

    for tail in 1..interval.len() {
        insert_tail(&mut interval[..=tail], is_less);
    }
}

/// Inserts `v[v.len() - 1]` into pre-sorted sequence `v[..v.len() - 1]` so that whole `v[..]`
/// becomes sorted.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let arr = v.as_mut_ptr();
    let i = len - 1;

    // SAFETY: `i` and `i - 1` are in-bounds because `len >= 2`, the loop only visits `0..i - 1`.
    // All reads and writes go through `arr`, which stays valid for the whole function.
    unsafe {
        let i_ptr = arr.add(i);
        if !is_less(&*i_ptr, &*i_ptr.sub(1)) {
            return;
        }

        // Read the tail out and shift larger elements right until its slot is found. The hole
        // always marks the one slot whose value is duplicated, if `is_less` panics it gets
        // dropped and restores the element, so `v` still holds every object exactly once.
        let tmp = ManuallyDrop::new(ptr::read(i_ptr));
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: i_ptr.sub(1),
        };
        ptr::copy_nonoverlapping(hole.dest, i_ptr, 1);

        for j in (0..(i - 1)).rev() {
            let j_ptr = arr.add(j);
            if !is_less(&*tmp, &*j_ptr) {
                break;
            }

            ptr::copy_nonoverlapping(j_ptr, hole.dest, 1);
            hole.dest = j_ptr;
        }
        // `hole` gets dropped and thus copies `tmp` into the remaining hole in `v`.
    }
}

// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points to the element read out of the slice and `dest` to the slot it
        // belongs into, the two never overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}
