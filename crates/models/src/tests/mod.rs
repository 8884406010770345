
/// Item name validation and activity log tests
pub mod item_tests;
