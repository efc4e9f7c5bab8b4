//! Integration tests for `BoundedBuffer` across dimensions and policies

use prim_foundation::prelude::*;
use proptest::prelude::*;

#[test]
fn test_two_by_three_scenario() -> Result<()> {
    let mut grid = Buffer2::<i32, 2, 3>::new();

    grid.zero();
    assert_eq!(grid[1][2], 0);

    grid[0][1] = 7;
    assert_eq!(grid[0][1], 7);
    assert_eq!(*grid.get(0)?.get(1)?, 7);

    assert!(grid.get(2).is_err());
    Ok(())
}

#[test]
#[should_panic(expected = "the len is 2 but the index is 2")]
fn test_strict_outer_dimension_panics() {
    let grid = Buffer2::<i32, 2, 3>::new();
    let _ = grid[2][0];
}

#[test]
fn test_clamp_outer_dimension_uses_last_row() {
    let mut grid = Buffer2::<i32, 2, 3, Clamp>::new();
    grid[1][0] = 11;

    assert_eq!(grid[2][0], 11);
    assert_eq!(grid[5][99], grid[1][2]);
}

#[test]
#[should_panic(expected = "the len is 3 but the index is 3")]
fn test_strict_offset_past_end_panics() {
    let buffer = BoundedBuffer::<u8, 3>::from_array([1, 2, 3]);
    let _ = buffer.offset(3);
}

#[test]
#[should_panic(expected = "the len is 3 but the index is 7")]
fn test_strict_offset_mut_past_end_panics() {
    let mut buffer = BoundedBuffer::<u8, 3>::from_array([1, 2, 3]);
    let _ = buffer.offset_mut(7);
}

#[test]
fn test_clamp_offset_past_end_yields_last_element() {
    let mut buffer = BoundedBuffer::<u8, 3, Clamp>::from_array([1, 2, 3]);

    assert_eq!(buffer.offset(10), &[3]);
    assert_eq!(buffer.offset(2), &[3]);
    assert_eq!(buffer.offset_ptr(10), buffer.offset(2).as_ptr());

    buffer.offset_mut(usize::MAX)[0] = 30;
    assert_eq!(buffer.into_array(), [1, 2, 30]);
}

#[test]
fn test_strict_offset_in_range() {
    let buffer = BoundedBuffer::<u8, 3>::from_array([1, 2, 3]);
    assert_eq!(buffer.offset(0), &[1, 2, 3]);
    assert_eq!(buffer.offset(2), &[3]);
    assert!(buffer.checked_offset(3).unwrap_err().is_bounds_error());
}

#[test]
fn test_zero_on_float_buffer() {
    let mut samples = BoundedBuffer::<f64, 4>::from_array([1.5, -2.0, 3.25, 8.0]);
    samples.zero();
    assert!(samples.is_zeroed());
    assert!(samples.iter().all(|v| v.to_bits() == 0));
}

#[test]
fn test_first_and_pointer_views() {
    let mut buffer = BoundedBuffer::<u32, 3>::from_array([4, 5, 6]);
    *buffer.first_mut() = 40;

    assert_eq!(*buffer.first(), 40);
    assert_eq!(buffer.as_ptr(), buffer.as_slice().as_ptr());
    assert_eq!(buffer.offset_mut(1), &mut [5, 6]);
}

#[test]
fn test_buffer_is_send_and_sync_when_elements_are() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BoundedBuffer<u8, 4, Clamp>>();
    assert_send_sync::<Buffer3<u64, 2, 2, 2>>();
}

proptest! {
    #[test]
    fn prop_fresh_buffer_reads_default(index in 0usize..16) {
        let buffer = BoundedBuffer::<u64, 16>::new();
        prop_assert_eq!(buffer[index], 0);
    }

    #[test]
    fn prop_zero_clears_everything(values in proptest::array::uniform8(any::<i32>())) {
        let mut buffer = BoundedBuffer::<i32, 8>::from_array(values);
        buffer.zero();
        prop_assert!(buffer.iter().all(|&v| v == 0));
    }

    #[test]
    fn prop_get_fails_exactly_out_of_range(index in 0usize..64) {
        let buffer = BoundedBuffer::<u8, 32>::new();
        prop_assert_eq!(buffer.get(index).is_ok(), index < 32);
    }

    #[test]
    fn prop_clamp_matches_saturated_index(index in any::<usize>()) {
        let buffer = BoundedBuffer::<usize, 8, Clamp>::from_array([0, 1, 2, 3, 4, 5, 6, 7]);
        prop_assert_eq!(buffer[index], index.min(7));
    }
}
