pub mod monoid {
    use std::marker::PhantomData;
    use std::ops::{Add, Mul};

    // monoid action A -> End(M), where A is a monoid and M is a monoid.
    // the image of A must distribute over the monoid operation of M, scaled by
    // the number of elements a node covers.
    pub trait MonoidAction {
        type X;
        type F;

        /// Identity of `combine`.
        fn id(&self) -> Self::X;
        fn combine(&self, lhs: &Self::X, rhs: &Self::X) -> Self::X;

        /// Identity of `combine_action`. A node holding it has nothing pending.
        fn id_action(&self) -> Self::F;
        // function composition: `lhs` is applied after `rhs`
        fn combine_action(&self, lhs: &Self::F, rhs: &Self::F) -> Self::F;

        fn apply_to_sum(&self, f: &Self::F, x_count: u32, x_sum: &Self::X) -> Self::X;
    }

    pub trait Bounded: Copy {
        const MIN: Self;
        const MAX: Self;
    }

    macro_rules! impl_bounded {
        ($($t:ty)+) => {
            $(
                impl Bounded for $t {
                    const MIN: Self = <$t>::MIN;
                    const MAX: Self = <$t>::MAX;
                }
            )+
        };
    }
    impl_bounded!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

    /// Element count of a node as a value, for actions that scale with width.
    pub trait FromWidth {
        fn from_width(width: u32) -> Self;
    }

    macro_rules! impl_from_width {
        ($($t:ty)+) => {
            $(
                impl FromWidth for $t {
                    fn from_width(width: u32) -> Self {
                        width as $t
                    }
                }
            )+
        };
    }
    impl_from_width!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);

    /// Range add, range sum. The neutral elements are stored so callers can
    /// pick them explicitly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RangeAddSum<T> {
        pub neutral: T,
        pub neutral_action: T,
    }

    impl<T> RangeAddSum<T> {
        pub fn new(neutral: T, neutral_action: T) -> Self {
            Self {
                neutral,
                neutral_action,
            }
        }
    }

    impl<T: Default> Default for RangeAddSum<T> {
        fn default() -> Self {
            Self::new(T::default(), T::default())
        }
    }

    impl<T> MonoidAction for RangeAddSum<T>
    where
        T: Clone + Add<Output = T> + Mul<Output = T> + FromWidth,
    {
        type X = T;
        type F = T;

        fn id(&self) -> T {
            self.neutral.clone()
        }

        fn combine(&self, lhs: &T, rhs: &T) -> T {
            lhs.clone() + rhs.clone()
        }

        fn id_action(&self) -> T {
            self.neutral_action.clone()
        }

        fn combine_action(&self, lhs: &T, rhs: &T) -> T {
            lhs.clone() + rhs.clone()
        }

        fn apply_to_sum(&self, f: &T, x_count: u32, x_sum: &T) -> T {
            x_sum.clone() + f.clone() * T::from_width(x_count)
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct RangeAddMin<T>(PhantomData<T>);

    impl<T> RangeAddMin<T> {
        pub fn new() -> Self {
            Self(PhantomData)
        }
    }

    impl<T: Bounded + Ord + Add<Output = T> + Default> MonoidAction for RangeAddMin<T> {
        type X = T;
        type F = T;

        fn id(&self) -> T {
            T::MAX
        }

        fn combine(&self, lhs: &T, rhs: &T) -> T {
            *lhs.min(rhs)
        }

        fn id_action(&self) -> T {
            T::default()
        }

        fn combine_action(&self, lhs: &T, rhs: &T) -> T {
            *lhs + *rhs
        }

        fn apply_to_sum(&self, f: &T, _: u32, x_sum: &T) -> T {
            *x_sum + *f
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct RangeAddMax<T>(PhantomData<T>);

    impl<T> RangeAddMax<T> {
        pub fn new() -> Self {
            Self(PhantomData)
        }
    }

    impl<T: Bounded + Ord + Add<Output = T> + Default> MonoidAction for RangeAddMax<T> {
        type X = T;
        type F = T;

        fn id(&self) -> T {
            T::MIN
        }

        fn combine(&self, lhs: &T, rhs: &T) -> T {
            *lhs.max(rhs)
        }

        fn id_action(&self) -> T {
            T::default()
        }

        fn combine_action(&self, lhs: &T, rhs: &T) -> T {
            *lhs + *rhs
        }

        fn apply_to_sum(&self, f: &T, _: u32, x_sum: &T) -> T {
            *x_sum + *f
        }
    }

    /// Range assign, range sum. `None` is the no-op marker.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RangeAssignSum<T>(PhantomData<T>);

    impl<T> RangeAssignSum<T> {
        pub fn new() -> Self {
            Self(PhantomData)
        }
    }

    impl<T> MonoidAction for RangeAssignSum<T>
    where
        T: Copy + Default + Add<Output = T> + Mul<Output = T> + FromWidth,
    {
        type X = T;
        type F = Option<T>;

        fn id(&self) -> T {
            T::default()
        }

        fn combine(&self, lhs: &T, rhs: &T) -> T {
            *lhs + *rhs
        }

        fn id_action(&self) -> Option<T> {
            None
        }

        fn combine_action(&self, lhs: &Option<T>, rhs: &Option<T>) -> Option<T> {
            lhs.or(*rhs)
        }

        fn apply_to_sum(&self, f: &Option<T>, x_count: u32, x_sum: &T) -> T {
            match f {
                Some(value) => *value * T::from_width(x_count),
                None => *x_sum,
            }
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct RangeAssignMin<T>(PhantomData<T>);

    impl<T> RangeAssignMin<T> {
        pub fn new() -> Self {
            Self(PhantomData)
        }
    }

    impl<T: Bounded + Ord> MonoidAction for RangeAssignMin<T> {
        type X = T;
        type F = Option<T>;

        fn id(&self) -> T {
            T::MAX
        }

        fn combine(&self, lhs: &T, rhs: &T) -> T {
            *lhs.min(rhs)
        }

        fn id_action(&self) -> Option<T> {
            None
        }

        fn combine_action(&self, lhs: &Option<T>, rhs: &Option<T>) -> Option<T> {
            lhs.or(*rhs)
        }

        fn apply_to_sum(&self, f: &Option<T>, _: u32, x_sum: &T) -> T {
            f.unwrap_or(*x_sum)
        }
    }

    /// Operator set assembled from three closures, each replaceable on its own.
    pub struct FnAction<X, F, Op, Act, Comp> {
        id: X,
        id_action: F,
        op: Op,
        act: Act,
        comp: Comp,
    }

    impl<X, F, Op, Act, Comp> FnAction<X, F, Op, Act, Comp>
    where
        Op: Fn(&X, &X) -> X,
        Act: Fn(&F, u32, &X) -> X,
        Comp: Fn(&F, &F) -> F,
    {
        pub fn new(id: X, id_action: F, op: Op, act: Act, comp: Comp) -> Self {
            Self {
                id,
                id_action,
                op,
                act,
                comp,
            }
        }
    }

    impl<X, F, Op, Act, Comp> MonoidAction for FnAction<X, F, Op, Act, Comp>
    where
        X: Clone,
        F: Clone,
        Op: Fn(&X, &X) -> X,
        Act: Fn(&F, u32, &X) -> X,
        Comp: Fn(&F, &F) -> F,
    {
        type X = X;
        type F = F;

        fn id(&self) -> X {
            self.id.clone()
        }

        fn combine(&self, lhs: &X, rhs: &X) -> X {
            (self.op)(lhs, rhs)
        }

        fn id_action(&self) -> F {
            self.id_action.clone()
        }

        fn combine_action(&self, lhs: &F, rhs: &F) -> F {
            (self.comp)(lhs, rhs)
        }

        fn apply_to_sum(&self, f: &F, x_count: u32, x_sum: &X) -> X {
            (self.act)(f, x_count, x_sum)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn add_sum_scales_by_width() {
            let ma = RangeAddSum::<i64>::default();
            assert_eq!(ma.apply_to_sum(&3, 4, &10), 22);
            assert_eq!(ma.combine_action(&3, &-5), -2);
            assert_eq!(ma.id(), 0);
        }

        #[test]
        fn assign_keeps_the_newer_value() {
            let ma = RangeAssignSum::<i64>::new();
            assert_eq!(ma.combine_action(&Some(7), &Some(2)), Some(7));
            assert_eq!(ma.combine_action(&None, &Some(2)), Some(2));
            assert_eq!(ma.apply_to_sum(&Some(7), 3, &100), 21);
            assert_eq!(ma.apply_to_sum(&None, 3, &100), 100);
        }

        #[test]
        fn narrow_integers_scale_by_width() {
            let ma = RangeAddSum::<i32>::default();
            assert_eq!(ma.apply_to_sum(&-3, 4, &10), -2);
            let ma = RangeAddSum::<usize>::default();
            assert_eq!(ma.apply_to_sum(&3, 4, &10), 22);
            let ma = RangeAssignSum::<i16>::new();
            assert_eq!(ma.apply_to_sum(&Some(-2), 5, &0), -10);
        }

        #[test]
        fn min_and_max_ignore_width() {
            let min = RangeAddMin::<i32>::new();
            let max = RangeAddMax::<i32>::new();
            assert_eq!(min.apply_to_sum(&-4, 1000, &10), 6);
            assert_eq!(max.apply_to_sum(&-4, 1000, &10), 6);
            assert_eq!(min.combine(&min.id(), &5), 5);
            assert_eq!(max.combine(&max.id(), &5), 5);
        }
    }
}
