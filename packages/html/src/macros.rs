//! The generators that turn the schema tables into element types.
//!
//! - [`choices!`] declares closed value sets.
//! - [`attribute_methods!`] expands one attribute declaration into its setter family.
//! - [`attribute_trait!`] declares a trait of shared attributes with a blanket or opt-in impl.
//! - [`elements!`] declares one wrapper type and constructor per element.
//!
//! Attribute declarations read `name: Kind` or `name("literal"): Kind`. The literal is
//! required whenever the markup name isn't the Rust identifier (`viewBox`, `http-equiv`,
//! `r#type`). Kinds are `String`, `i64`, `f64`, `bool`, `SpacedList`, `CommaList`,
//! `Style`, or the name of a choice enum.

macro_rules! choices {
    ( $(
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    )* ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum $name {
                $(
                    $(#[$variant_meta])*
                    #[doc = concat!("`", $value, "`")]
                    $variant,
                )*
            }

            impl $name {
                /// Every legal value, in declaration order.
                pub const ALL: &'static [$name] = &[$($name::$variant),*];

                pub const fn as_str(self) -> &'static str {
                    match self {
                        $($name::$variant => $value,)*
                    }
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl ::std::str::FromStr for $name {
                type Err = $crate::UnknownChoice;

                fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                    match value {
                        $($value => Ok($name::$variant),)*
                        _ => Err($crate::UnknownChoice {
                            choice: stringify!($name),
                            value: value.to_string(),
                        }),
                    }
                }
            }

            impl From<$name> for String {
                fn from(value: $name) -> String {
                    value.as_str().to_string()
                }
            }
        )*
    };
}

macro_rules! attribute_methods {
    // Resolve the markup name, then dispatch on the kind.
    (@resolve [$($vis:tt)*] $name:ident [] $kind:tt) => {
        attribute_methods!([$($vis)*] $name stringify!($name); $kind);
    };
    (@resolve [$($vis:tt)*] $name:ident [$lit:literal] $kind:tt) => {
        attribute_methods!([$($vis)*] $name $lit; $kind);
    };

    ([$($vis:tt)*] $name:ident $lit:expr; String) => {
        paste::paste! {
            #[doc = concat!("Set the `", $lit, "` attribute.")]
            $($vis)* fn $name(mut self, value: impl Into<String>) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).set_string_attribute($lit, value);
                self
            }

            $($vis)* fn [<if_ $name>](self, condition: bool, value: impl Into<String>) -> Self {
                if condition { self.$name(value) } else { self }
            }

            $($vis)* fn [<$name _f>](self, args: ::std::fmt::Arguments<'_>) -> Self {
                self.$name(args.to_string())
            }

            $($vis)* fn [<if_ $name _f>](self, condition: bool, args: ::std::fmt::Arguments<'_>) -> Self {
                if condition { self.[<$name _f>](args) } else { self }
            }

            $($vis)* fn [<$name _remove>](mut self) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).remove_string_attribute($lit);
                self
            }
        }
    };

    ([$($vis:tt)*] $name:ident $lit:expr; i64) => {
        paste::paste! {
            #[doc = concat!("Set the `", $lit, "` attribute.")]
            $($vis)* fn $name(mut self, value: i64) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).set_int_attribute($lit, value);
                self
            }

            $($vis)* fn [<if_ $name>](self, condition: bool, value: i64) -> Self {
                if condition { self.$name(value) } else { self }
            }

            $($vis)* fn [<$name _remove>](mut self) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).remove_int_attribute($lit);
                self
            }
        }
    };

    ([$($vis:tt)*] $name:ident $lit:expr; f64) => {
        paste::paste! {
            #[doc = concat!("Set the `", $lit, "` attribute.")]
            $($vis)* fn $name(mut self, value: f64) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).set_float_attribute($lit, value);
                self
            }

            $($vis)* fn [<if_ $name>](self, condition: bool, value: f64) -> Self {
                if condition { self.$name(value) } else { self }
            }

            $($vis)* fn [<$name _remove>](mut self) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).remove_float_attribute($lit);
                self
            }
        }
    };

    // rendered as the literal `true` / `false`
    ([$($vis:tt)*] $name:ident $lit:expr; bool) => {
        paste::paste! {
            #[doc = concat!("Set the `", $lit, "` attribute to `true` or `false`.")]
            $($vis)* fn $name(mut self, value: bool) -> Self {
                let value = if value { "true" } else { "false" };
                ::ztml_core::HasElement::element_mut(&mut self).set_string_attribute($lit, value);
                self
            }

            $($vis)* fn [<if_ $name>](self, condition: bool, value: bool) -> Self {
                if condition { self.$name(value) } else { self }
            }

            $($vis)* fn [<$name _remove>](mut self) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).remove_string_attribute($lit);
                self
            }
        }
    };

    ([$($vis:tt)*] $name:ident $lit:expr; SpacedList) => {
        attribute_methods!(@list [$($vis)*] $name $lit; " ");
    };

    ([$($vis:tt)*] $name:ident $lit:expr; CommaList) => {
        attribute_methods!(@list [$($vis)*] $name $lit; ",");
    };

    (@list [$($vis:tt)*] $name:ident $lit:expr; $delimiter:literal) => {
        paste::paste! {
            #[doc = concat!("Add tokens to the `", $lit, "` attribute. A value holding several delimited tokens is split; tokens already present are skipped.")]
            $($vis)* fn $name(mut self, tokens: impl ::ztml_core::IntoTokens) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self)
                    .delimited_mut($lit, $delimiter)
                    .add_split(tokens.into_tokens());
                self
            }

            $($vis)* fn [<if_ $name>](self, condition: bool, tokens: impl ::ztml_core::IntoTokens) -> Self {
                if condition { self.$name(tokens) } else { self }
            }

            $($vis)* fn [<$name _f>](self, args: ::std::fmt::Arguments<'_>) -> Self {
                self.$name(args.to_string())
            }

            $($vis)* fn [<if_ $name _f>](self, condition: bool, args: ::std::fmt::Arguments<'_>) -> Self {
                if condition { self.[<$name _f>](args) } else { self }
            }

            #[doc = concat!("Remove tokens from the `", $lit, "` attribute.")]
            $($vis)* fn [<$name _remove>](mut self, tokens: impl ::ztml_core::IntoTokens) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self)
                    .delimited_mut($lit, $delimiter)
                    .remove_split(tokens.into_tokens());
                self
            }
        }
    };

    ([$($vis:tt)*] $name:ident $lit:expr; Style) => {
        paste::paste! {
            #[doc = concat!("Set one `key:value` entry of the `", $lit, "` attribute.")]
            $($vis)* fn $name(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).kv_mut($lit).add(key, value);
                self
            }

            $($vis)* fn [<if_ $name>](
                self,
                condition: bool,
                key: impl Into<String>,
                value: impl Into<String>,
            ) -> Self {
                if condition { self.$name(key, value) } else { self }
            }

            $($vis)* fn [<$name _f>](self, key: impl Into<String>, args: ::std::fmt::Arguments<'_>) -> Self {
                self.$name(key, args.to_string())
            }

            $($vis)* fn [<$name _map>]<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
            where
                K: Into<String>,
                V: Into<String>,
            {
                ::ztml_core::HasElement::element_mut(&mut self).kv_mut($lit).extend(entries);
                self
            }

            /// Add entries from a flat `[key1, value1, key2, value2, ..]` list.
            ///
            /// # Panics
            ///
            /// Panics before writing anything if the list has an odd length.
            #[track_caller]
            $($vis)* fn [<$name _pairs>](mut self, flat: impl IntoIterator<Item = impl Into<String>>) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).kv_mut($lit).add_pairs(flat);
                self
            }

            #[doc = concat!("Remove one key from the `", $lit, "` attribute.")]
            $($vis)* fn [<$name _remove>](mut self, key: &str) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).kv_mut($lit).remove(key);
                self
            }
        }
    };

    // anything else names a choice enum
    ([$($vis:tt)*] $name:ident $lit:expr; $choice:ident) => {
        paste::paste! {
            #[doc = concat!("Set the `", $lit, "` attribute to one of its legal values.")]
            $($vis)* fn $name(mut self, value: $crate::choices::$choice) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).set_string_attribute($lit, value.as_str());
                self
            }

            $($vis)* fn [<if_ $name>](self, condition: bool, value: $crate::choices::$choice) -> Self {
                if condition { self.$name(value) } else { self }
            }

            $($vis)* fn [<$name _remove>](mut self) -> Self {
                ::ztml_core::HasElement::element_mut(&mut self).remove_string_attribute($lit);
                self
            }
        }
    };
}

macro_rules! attribute_trait {
    (
        $(#[$meta:meta])*
        pub trait $trait:ident for $impls:tt {
            $(
                $attr:ident $(($lit:literal))? : $kind:tt
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub trait $trait: ::ztml_core::HasElement {
            $(
                attribute_methods!(@resolve [] $attr [$($lit)?] $kind);
            )*
        }

        attribute_trait!(@impl $trait $impls);
    };

    (@impl $trait:ident all) => {
        impl<T: ::ztml_core::HasElement> $trait for T {}
    };

    // implemented per element type by `elements!`
    (@impl $trait:ident opt_in) => {};
}

macro_rules! elements {
    (
        traits: $traits:tt;

        $(
            $(#[$meta:meta])*
            $ctor:ident($ty:ident) $tag:literal $([$void:ident])? {
                $(
                    $attr:ident $(($lit:literal))? : $kind:tt
                ),* $(,)?
            };
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq)]
            pub struct $ty(::ztml_core::Element);

            $(#[$meta])*
            pub fn $ctor() -> $ty {
                $ty::new()
            }

            impl $ty {
                /// The tag this type renders as.
                pub const TAG: &'static str = $tag;

                /// Whether this element renders as a single `<tag/>`.
                pub const SELF_CLOSING: bool = elements!(@void $($void)?);

                pub fn new() -> Self {
                    Self(::ztml_core::Element::new($tag, Self::SELF_CLOSING))
                }

                $(
                    attribute_methods!(@resolve [pub] $attr [$($lit)?] $kind);
                )*
            }

            impl Default for $ty {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl ::ztml_core::HasElement for $ty {
                fn element(&self) -> &::ztml_core::Element {
                    &self.0
                }

                fn element_mut(&mut self) -> &mut ::ztml_core::Element {
                    &mut self.0
                }

                fn into_element(self) -> ::ztml_core::Element {
                    self.0
                }
            }

            impl From<$ty> for ::ztml_core::Element {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    self.0.write_to(f)
                }
            }

            elements!(@traits $ty $traits);
        )*
    };

    (@void) => { false };
    (@void self_closing) => { true };

    (@traits $ty:ident [$($trait:path),* $(,)?]) => {
        $(impl $trait for $ty {})*
    };
}
