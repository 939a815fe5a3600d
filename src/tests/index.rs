use crate::index::{check_len, count, count_to_end, space, space_to_end, wrap};

#[test]
fn check_len_accepts_powers_of_two_only() {
    assert!(check_len(0).is_err());
    assert!(check_len(1).is_err());
    assert!(check_len(3).is_err());
    assert!(check_len(6).is_err());
    assert!(check_len(100).is_err());

    assert!(check_len(2).is_ok());
    assert!(check_len(8).is_ok());
    assert!(check_len(1024).is_ok());
}

#[test]
fn wrap_is_bitmask_modulo() {
    assert_eq!(wrap(0, 8), 0);
    assert_eq!(wrap(7, 8), 7);
    assert_eq!(wrap(8, 8), 0);
    assert_eq!(wrap(13, 8), 5);
}

#[test]
fn count_and_space_are_complementary() {
    for head in 0..8 {
        for tail in 0..8 {
            assert_eq!(count(head, tail, 8) + space(head, tail, 8), 7);
        }
    }
}

#[test]
fn count_wraps_through_zero() {
    assert_eq!(count(0, 0, 8), 0);
    assert_eq!(count(5, 2, 8), 3);
    // head wrapped around, tail has not caught up yet
    assert_eq!(count(1, 6, 8), 3);
    assert_eq!(space(1, 6, 8), 4);
}

#[test]
fn contiguous_runs() {
    // occupied region is slots 2..5, fully contiguous
    assert_eq!(count_to_end(5, 2, 8), 3);
    assert_eq!(space_to_end(5, 2, 8), 3);

    // occupied region wraps: slots 6, 7, 0, 1
    assert_eq!(count_to_end(2, 6, 8), 2);
    assert_eq!(space_to_end(2, 6, 8), 3);

    // empty buffer at the origin
    assert_eq!(count_to_end(0, 0, 8), 0);
    assert_eq!(space_to_end(0, 0, 8), 7);

    // full buffer
    assert_eq!(count_to_end(7, 0, 8), 7);
    assert_eq!(space_to_end(7, 0, 8), 0);
}

#[test]
fn count_to_end_accepts_a_peeked_tail() {
    // head = 2, real tail = 6; a peek that consumed the first run continues
    // from a local tail of 0
    assert_eq!(count_to_end(2, 6, 8), 2);
    assert_eq!(count_to_end(2, 0, 8), 2);
    assert_eq!(count_to_end(2, 2, 8), 0);
}
