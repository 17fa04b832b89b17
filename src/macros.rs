/// Declares the slots of a record type, in field order.
///
/// For each `Marker(field: Type)` entry this generates a unit marker type
/// implementing [`Slot`](crate::Slot); adding `= expr` declares a default and
/// makes the slot optional. The macro also implements
/// [`Record`](crate::Record) and [`Buildable`](crate::Buildable) for the
/// record, so the slot list, the field list, and the builder all agree by
/// construction: a slot entry whose name, type, or position does not match
/// the struct's fields fails to compile inside the generated impl.
///
/// Slot value types must be `Clone`; branched chains and the dynamic draft
/// both duplicate values.
///
/// ```
/// use fx_slot_builder::{slots, Buildable};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Pour {
///     volume: u32,
///     label: String,
/// }
///
/// slots! {
///     impl Pour {
///         Volume(volume: u32),
///         Label(label: String = String::from("house")),
///     }
/// }
///
/// let pour = Pour::builder().set(Volume, 250).build();
///
/// assert_eq!(
///     pour,
///     Pour {
///         volume: 250,
///         label: String::from("house"),
///     }
/// );
/// ```
#[macro_export]
macro_rules! slots {
    (
        impl $record:ty {
            $( $slot:ident ( $field:ident : $value:ty $( = $default:expr )? ) ),+ $(,)?
        }
    ) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub struct $slot;

            impl $crate::Slot for $slot {
                const NAME: &str = stringify!($field);

                type Value = $value;
            }

            $(
                impl $crate::OptionalSlot for $slot {
                    fn default_value() -> $value {
                        $default
                    }
                }
            )?
        )+

        impl $crate::Record for $record {
            type Fields = $crate::HList![$( $value ),+];

            fn from_fields(fields: Self::Fields) -> Self {
                let $crate::hlist_pat![$( $field ),+] = fields;

                Self { $( $field ),+ }
            }

            fn into_fields(self) -> Self::Fields {
                $crate::hlist![$( self.$field ),+]
            }

            fn schema() -> ::std::vec::Vec<$crate::FieldSchema> {
                ::std::vec![$( $crate::FieldSchema::of::<$value>(stringify!($field)) ),+]
            }

            fn from_erased(values: &[$crate::ErasedValue]) -> Self {
                let mut values = values.iter();

                Self {
                    $(
                        $field: values
                            .next()
                            .and_then(|value| value.downcast_ref::<$value>())
                            .cloned()
                            .expect("slot values are verified against the record schema"),
                    )+
                }
            }
        }

        impl $crate::Buildable for $record {
            type Empty = $crate::HList![$( $crate::Unset<$slot> ),+];

            fn builder() -> $crate::Builder<Self, Self::Empty> {
                $crate::Builder::from_state($crate::hlist![$( $crate::Unset::<$slot>::new() ),+])
            }
        }
    };
}
