// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[macro_export]
/// Declares a bounded integer type backed by the native engine.
///
/// `native_range!(Name: MIN, MAX)` declares an uninhabited marker type
/// `NameRange` implementing [`NativeRange`], and a type alias
/// `Name = NativeInt<NameRange>`. Both bounds must be `i64` constant
/// expressions, and a declaration whose minimum exceeds its maximum fails to
/// compile.
///
/// [`NativeRange`]: crate::NativeRange
///
/// # Examples:
/// ```
/// use strictnum::native_range;
///
/// native_range!(
///     /// A whole percentage.
///     pub Percent: 0, 100
/// );
///
/// assert!(Percent::new(100).is_ok());
/// assert!(Percent::new(101).is_err());
/// assert_eq!(format!("{:?}", Percent::MAX), "Percent(100)");
/// ```
///
/// ```compile_fail
/// strictnum::native_range!(Backwards: 10, -10);
/// ```
macro_rules! native_range {
    ($(#[$attr:meta])* $vis:vis $name:ident: $min:expr, $max:expr) => {
        $crate::__private::paste::paste! {
            #[doc = "The range of a bounded type declared with `native_range!`."]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum [<$name Range>] {}

            impl $crate::NativeRange for [<$name Range>] {
                const NAME: &'static str = stringify!($name);
                const MIN_VALUE: i64 = $min;
                const MAX_VALUE: i64 = $max;
            }

            $crate::__private::static_assertions::const_assert!(
                <[<$name Range>] as $crate::NativeRange>::MIN_VALUE
                    <= <[<$name Range>] as $crate::NativeRange>::MAX_VALUE
            );

            $(#[$attr])*
            $vis type $name = $crate::NativeInt<[<$name Range>]>;
        }
    };
}

#[macro_export]
/// Declares a bounded integer type backed by the big engine.
///
/// `big_range!(Name: repr, MIN, MAX)` is like [`native_range!`], except that
/// the bounds are constant expressions of the primitive type `repr`, one of
/// `i64`, `u64`, `i128`, or `u128`, and the alias names a [`BigInt`].
///
/// [`native_range!`]: crate::native_range
/// [`BigInt`]: crate::BigInt
///
/// # Examples:
/// ```
/// use strictnum::big_range;
///
/// big_range!(pub Nanos: u128, 0, 10u128.pow(30));
///
/// assert!(Nanos::new(10u128.pow(30)).is_ok());
/// assert!(Nanos::new(10u128.pow(30) + 1).is_err());
/// ```
macro_rules! big_range {
    ($(#[$attr:meta])* $vis:vis $name:ident: $repr:ident, $min:expr, $max:expr) => {
        $crate::__private::paste::paste! {
            #[doc = "The range of a bounded type declared with `big_range!`."]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum [<$name Range>] {}

            impl $crate::BigRange for [<$name Range>] {
                const NAME: &'static str = stringify!($name);
                const MIN_VALUE: $crate::Wide = $crate::Wide::[<from_ $repr>]($min);
                const MAX_VALUE: $crate::Wide = $crate::Wide::[<from_ $repr>]($max);
            }

            $crate::__private::static_assertions::const_assert!(
                <[<$name Range>] as $crate::BigRange>::MIN_VALUE
                    .is_at_most(<[<$name Range>] as $crate::BigRange>::MAX_VALUE)
            );

            $(#[$attr])*
            $vis type $name = $crate::BigInt<[<$name Range>]>;
        }
    };
}

#[macro_export]
/// Declares a bounded float type.
///
/// `float_range!(Name: MIN, MAX)` is like [`native_range!`], except that the
/// bounds are `f64` constant expressions, which must be finite, and the
/// alias names a [`BoundedFloat`].
///
/// [`native_range!`]: crate::native_range
/// [`BoundedFloat`]: crate::BoundedFloat
///
/// # Examples:
/// ```
/// use strictnum::float_range;
///
/// float_range!(pub Probability: 0.0, 1.0);
///
/// assert!(Probability::new(0.5).is_ok());
/// assert!(Probability::new(1.5).is_err());
/// assert!(Probability::new(f64::NAN).is_ok());
/// ```
macro_rules! float_range {
    ($(#[$attr:meta])* $vis:vis $name:ident: $min:expr, $max:expr) => {
        $crate::__private::paste::paste! {
            #[doc = "The range of a bounded type declared with `float_range!`."]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum [<$name Range>] {}

            impl $crate::FloatRange for [<$name Range>] {
                const NAME: &'static str = stringify!($name);
                const MIN_VALUE: f64 = $min;
                const MAX_VALUE: f64 = $max;
            }

            $crate::__private::static_assertions::const_assert!(
                <[<$name Range>] as $crate::FloatRange>::MIN_VALUE
                    <= <[<$name Range>] as $crate::FloatRange>::MAX_VALUE
            );
            $crate::__private::static_assertions::const_assert!(
                <[<$name Range>] as $crate::FloatRange>::MIN_VALUE > f64::NEG_INFINITY
                    && <[<$name Range>] as $crate::FloatRange>::MAX_VALUE < f64::INFINITY
            );

            $(#[$attr])*
            $vis type $name = $crate::BoundedFloat<[<$name Range>]>;
        }
    };
}

#[macro_export]
/// A macro to construct a bounded value from a literal.
/// Converts the literal to a string, and then parses the string into a value
/// of the given type.
/// Panics if the literal is not a valid value of the type.
///
/// # Examples:
/// ```
/// use strictnum::{bounded, Float64, Int8, UInt128};
///
/// assert_eq!(bounded!(Int8, -128), Int8::MIN);
/// assert_eq!(
///     bounded!(UInt128, 340282366920938463463374607431768211455),
///     UInt128::MAX,
/// );
/// assert!(bounded!(Float64, 0.5).value() == 0.5);
/// ```
///
/// ```should_panic
/// use strictnum::{bounded, Int8};
///
/// bounded!(Int8, 128);
/// ```
macro_rules! bounded {
    ($t:ty, $l:expr) => {
        <$t as ::std::str::FromStr>::from_str(stringify!($l))
            .unwrap_or_else(|e| panic!("{}", e))
    };
}
