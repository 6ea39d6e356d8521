pub mod num_mod_static {
    //! Integers modulo a compile-time modulus.
    //!
    //! `inv` uses Fermat's little theorem and is only correct when `M` is prime.
    //! For a composite modulus it returns a value, just not an inverse.

    use std::fmt;
    use std::iter::{Product, Sum};
    use std::ops::*;

    pub const MOD_CONST: u64 = 1_000_000_007;
    pub const MOD1_CONST: u64 = 998_244_353;

    pub type Mint = ModInt<MOD_CONST>;
    pub type Mint1 = ModInt<MOD1_CONST>;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModInt<const M: u64>(u64);

    impl<const M: u64> ModInt<M> {
        const NONZERO_MODULUS: () = assert!(M > 0, "modulus must be positive");

        pub const fn modulus() -> u64 {
            M
        }

        /// Normalizes any signed value into `0..M`.
        pub fn new(value: i64) -> Self {
            let () = Self::NONZERO_MODULUS;
            Self((value as i128).rem_euclid(M as i128) as u64)
        }

        pub fn zero() -> Self {
            Self(0)
        }

        pub fn one() -> Self {
            Self(1 % M)
        }

        pub fn value(self) -> u64 {
            self.0
        }

        pub fn pow(self, mut exp: u64) -> Self {
            let mut res = Self::one();
            let mut base = self;
            while exp > 0 {
                if exp & 1 == 1 {
                    res *= base;
                }
                base *= base;
                exp >>= 1;
            }
            res
        }

        // assumes M is prime; zero maps to zero
        pub fn inv(self) -> Self {
            self.pow(M.saturating_sub(2))
        }
    }

    impl<const M: u64> From<u64> for ModInt<M> {
        fn from(value: u64) -> Self {
            let () = Self::NONZERO_MODULUS;
            Self(value % M)
        }
    }

    impl<const M: u64> From<u32> for ModInt<M> {
        fn from(value: u32) -> Self {
            Self::from(value as u64)
        }
    }

    impl<const M: u64> From<usize> for ModInt<M> {
        fn from(value: usize) -> Self {
            Self::from(value as u64)
        }
    }

    impl<const M: u64> From<i64> for ModInt<M> {
        fn from(value: i64) -> Self {
            Self::new(value)
        }
    }

    impl<const M: u64> crate::monoid::FromWidth for ModInt<M> {
        fn from_width(width: u32) -> Self {
            Self::from(width)
        }
    }

    impl<const M: u64> AddAssign<&'_ Self> for ModInt<M> {
        fn add_assign(&mut self, rhs: &Self) {
            let (sum, carry) = self.0.overflowing_add(rhs.0);
            self.0 = if carry || sum >= M {
                sum.wrapping_sub(M)
            } else {
                sum
            };
        }
    }

    impl<const M: u64> SubAssign<&'_ Self> for ModInt<M> {
        fn sub_assign(&mut self, rhs: &Self) {
            self.0 = if self.0 < rhs.0 {
                M - rhs.0 + self.0
            } else {
                self.0 - rhs.0
            };
        }
    }

    impl<const M: u64> MulAssign<&'_ Self> for ModInt<M> {
        fn mul_assign(&mut self, rhs: &Self) {
            self.0 = (self.0 as u128 * rhs.0 as u128 % M as u128) as u64;
        }
    }

    impl<const M: u64> DivAssign<&'_ Self> for ModInt<M> {
        fn div_assign(&mut self, rhs: &Self) {
            self.mul_assign(&rhs.inv());
        }
    }

    macro_rules! forward_binop {
        ($OpAssign:ident $op_assign:ident, $Op:ident $op:ident) => {
            impl<const M: u64> $OpAssign for ModInt<M> {
                fn $op_assign(&mut self, rhs: Self) {
                    self.$op_assign(&rhs);
                }
            }

            impl<const M: u64> $Op<&'_ Self> for ModInt<M> {
                type Output = Self;
                fn $op(mut self, rhs: &Self) -> Self {
                    self.$op_assign(rhs);
                    self
                }
            }

            impl<const M: u64> $Op for ModInt<M> {
                type Output = Self;
                fn $op(self, rhs: Self) -> Self {
                    self.$op(&rhs)
                }
            }
        };
    }
    forward_binop!(AddAssign add_assign, Add add);
    forward_binop!(SubAssign sub_assign, Sub sub);
    forward_binop!(MulAssign mul_assign, Mul mul);
    forward_binop!(DivAssign div_assign, Div div);

    impl<const M: u64> Neg for ModInt<M> {
        type Output = Self;
        fn neg(self) -> Self {
            Self::zero() - self
        }
    }

    impl<const M: u64> Sum for ModInt<M> {
        fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), |acc, x| acc + x)
        }
    }

    impl<const M: u64> Product for ModInt<M> {
        fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
            iter.fold(Self::one(), |acc, x| acc * x)
        }
    }

    impl<const M: u64> fmt::Debug for ModInt<M> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} (mod {})", self.0, M)
        }
    }

    impl<const M: u64> fmt::Display for ModInt<M> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn normalizes_negative_values() {
            assert_eq!(Mint::new(-1).value(), MOD_CONST - 1);
            assert_eq!(Mint::new(-(MOD_CONST as i64) * 3 - 5).value(), MOD_CONST - 5);
            assert_eq!(Mint::new(MOD_CONST as i64).value(), 0);
        }

        #[test]
        fn subtraction_wraps() {
            let a = Mint::new(3);
            let b = Mint::new(10);
            assert_eq!((a - b).value(), MOD_CONST - 7);
            assert_eq!((-a).value(), MOD_CONST - 3);
            assert_eq!(-Mint::zero(), Mint::zero());
        }

        #[test]
        fn pow_and_inverse() {
            assert_eq!(Mint::new(2).pow(10).value(), 1024);
            assert_eq!(Mint1::new(3).pow(MOD1_CONST - 1), Mint1::one());
            for x in [1, 2, 3, 12345, 999_999_999] {
                let x = Mint::new(x);
                assert_eq!(x * x.inv(), Mint::one());
                assert_eq!(Mint::new(7) / x * x, Mint::new(7));
            }
            assert_eq!(Mint::zero().inv(), Mint::zero());
        }

        #[test]
        fn large_products_do_not_overflow() {
            let x = Mint::new(MOD_CONST as i64 - 1);
            assert_eq!((x * x).value(), 1);
            let big = ModInt::<{ (1 << 61) - 1 }>::from((1u64 << 61) - 2);
            assert_eq!((big * big).value(), 1);
        }

        #[test]
        fn moduli_above_i64_max() {
            const P: u64 = u64::MAX - 58;
            type Wide = ModInt<P>;
            assert_eq!(Wide::new(-1).value(), P - 1);
            assert_eq!(Wide::new(i64::MIN).value(), P - (1 << 63));
            let x = Wide::new(-1);
            assert_eq!((x + x).value(), P - 2);
            assert_eq!((x + Wide::one()).value(), 0);
            assert_eq!((Wide::zero() - Wide::one()).value(), P - 1);
            assert_eq!((Wide::one() - x).value(), 2);
            assert_eq!(x * x, Wide::one());
        }
    }
}
