/// Declares a route tree with nested `key: "template"` entries.
///
/// ```
/// use route_template_rs::{params, routes};
///
/// let routes = routes!("/" => {
///     users: "/users" => {
///         detail: "/users/:id",
///     },
/// });
///
/// assert_eq!(routes["users"]["detail"].render(&params! { "id" => 7 }).unwrap(), "/users/7");
/// ```
#[macro_export]
macro_rules! routes {
    ($template:expr => { $($key:ident : $child:expr $(=> $children:tt)?),* $(,)? }) => {
        $crate::route($template)
            $(.with_child(stringify!($key), $crate::routes!($child $(=> $children)?)))*
    };
    ($template:expr) => {
        $crate::route($template)
    };
}
