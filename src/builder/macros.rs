//! Macros for ergonomic state machine construction.

/// Generate a `State` trait implementation for simple enums.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`,
/// `Debug` and the serde traits; the optional `final:` and `error:`
/// lists feed `is_final` and `is_error`.
///
/// # Example
///
/// ```
/// use rowfsm::state_enum;
///
/// state_enum! {
///     pub enum PlayerState {
///         Stopped,
///         Playing,
///         Broken,
///     }
///     final: [Broken]
///     error: [Broken]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
