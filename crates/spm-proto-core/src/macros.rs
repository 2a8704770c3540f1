// repeated
/// Build a `RepeatedField` from a list of elements, like `vec!`.
#[macro_export]
macro_rules! repeated {
    () => {
        $crate::RepeatedField::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::RepeatedField::from_vec(vec![$($value),+])
    };
}
