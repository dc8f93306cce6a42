use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_slot_stays_empty() {
    let slot = SessionSlot::<Vec<u8>>::new();
    slot.fill(vec![1, 2, 3]);
    assert!(!slot.is_filled());
    assert_eq!(slot.with_mut(|v| v.push(4)), None);
    slot.clear();
}

#[test]
fn slot_is_copy() {
    fn assert_copy<T: Copy + Send + Sync>() {}
    assert_copy::<SessionSlot<std::rc::Rc<u8>>>();
}
