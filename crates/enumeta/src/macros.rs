//! Enum declaration macro

/// Declare an enum type.
///
/// Generates the marker struct, its [`Enum`](crate::Enum) impl, and one
/// factory function per constant (the constant's name, verbatim), so
/// `Priority::Low()` is the member named `"Low"`.
///
/// Constant shapes mirror the declaration forms of the metadata model:
///
/// - `Key = [value, label]` — explicit label
/// - `Key = value` or `Key = [value]` — scalar; the label defaults to the
///   value's string form (use the bracketed form for negative literals)
///
/// ```rust
/// use enumeta::{declare_enum, Enum, EnumValue};
///
/// declare_enum! {
///     /// Sample numbers.
///     pub enum Sample {
///         One = [1, "一"],
///         Two = [2, "二"],
///     }
/// }
///
/// assert_eq!(Sample::One().label(), "一");
/// assert_eq!(Sample::label_to_value("二"), Some(EnumValue::Int(2)));
/// ```
#[macro_export]
macro_rules! declare_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$cmeta:meta])* $key:ident = $init:tt ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis struct $name;

        impl $crate::Enum for $name {
            const NAME: &'static str = stringify!($name);

            fn constants() -> ::std::vec::Vec<(&'static str, $crate::ConstInit)> {
                ::std::vec::Vec::from([
                    $( (stringify!($key), $crate::declare_enum!(@init $init)) ),+
                ])
            }
        }

        impl $name {
            $(
                $(#[$cmeta])*
                #[allow(non_snake_case)]
                $vis fn $key() -> $crate::Member<$name> {
                    <$name as $crate::Enum>::from_key(stringify!($key)).expect(concat!(
                        "constant ",
                        stringify!($key),
                        " is declared on enum ",
                        stringify!($name)
                    ))
                }
            )+
        }
    };

    (@init [$value:expr, $label:expr]) => {
        $crate::ConstInit::labeled($value, $label)
    };
    (@init [$value:expr]) => {
        $crate::ConstInit::scalar($value)
    };
    (@init $value:tt) => {
        $crate::ConstInit::scalar($value)
    };
}
