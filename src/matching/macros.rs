/// Build a [`Branches`](crate::Branches) set from `key => value` arms.
///
/// `key => lazy producer` adds a lazily evaluated arm. A trailing `_ => ...` arm,
/// which also accepts `lazy`, sets the default.
///
/// ```
/// use keymatch::branches;
///
/// let picked = branches! {
///     "a" => "v1",
///     "b" => lazy || "v2",
///     _ => "d",
/// }
/// .resolve("b");
/// assert_eq!(picked, "v2");
///
/// let strict = branches! { 1 => "one", 2 => "two" };
/// assert!(strict.try_resolve(&3).is_err());
/// ```
#[macro_export]
macro_rules! branches {
    (@arms $set:expr;) => {
        $set
    };
    (@arms $set:expr; _ => lazy $producer:expr $(,)?) => {
        $set.otherwise_with($producer)
    };
    (@arms $set:expr; _ => $value:expr $(,)?) => {
        $set.otherwise($value)
    };
    (@arms $set:expr; $key:expr => lazy $producer:expr $(, $($rest:tt)*)?) => {
        $crate::branches!(@arms $set.on_with($key, $producer); $($($rest)*)?)
    };
    (@arms $set:expr; $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $crate::branches!(@arms $set.on($key, $value); $($($rest)*)?)
    };
    ($($arms:tt)*) => {
        $crate::branches!(@arms $crate::Branches::new(); $($arms)*)
    };
}
