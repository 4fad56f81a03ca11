use crate::error::{Error, Result};

/// Selects `count` elements of `items` centered on `offset`, treating `items` as a ring.
///
/// An even `count` is bumped to the next odd number so the window is symmetric around
/// `offset`. Elements are returned in ring order starting from the lowest position of
/// the window, so a window that runs past either end continues at the other end.
/// Returns an empty vector when `items` is empty or `count` is 0.
pub fn offset_centered_wrapped_subset<T: Clone>(items: &[T], offset: usize, count: usize) -> Result<Vec<T>> {
    if items.is_empty() || count < 1 {
        return Ok(Vec::new());
    }

    let len = items.len();
    if offset >= len {
        return Err(Error::OffsetOutOfRange { offset, len });
    }

    let count = if count % 2 == 0 { count + 1 } else { count };
    let half = count / 2;

    let res = if half <= offset && offset + half < len {
        items[offset - half..=offset + half].to_vec()
    } else {
        //window overruns a boundary, continue on the other side of the ring
        let start = (offset as isize - half as isize).rem_euclid(len as isize) as usize;
        items.iter().cycle().skip(start).take(count).cloned().collect()
    };

    Ok(res)
}
