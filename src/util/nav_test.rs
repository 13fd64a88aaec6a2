use super::*;

#[test]
fn tone_classes() {
    assert_eq!(NavTone::Active.class(), "advm-green-color");
    assert_eq!(NavTone::Idle.class(), "white-color");
}

#[test]
fn opposite_swaps() {
    assert_eq!(NavTone::Active.opposite(), NavTone::Idle);
    assert_eq!(NavTone::Idle.opposite(), NavTone::Active);
}
