pub mod factorial {
    use crate::num_mod_static::ModInt;
    use crate::error::{Error, Result};
    use crate::precondition;

    /// Factorials and inverse factorials up to a bound fixed at construction.
    /// The modulus must be prime and larger than the bound.
    #[derive(Debug, Clone)]
    pub struct FactorialTable<const M: u64> {
        fac: Vec<ModInt<M>>,
        ifac: Vec<ModInt<M>>,
    }

    impl<const M: u64> FactorialTable<M> {
        pub fn new(n_bound: usize) -> Self {
            precondition!(
                (n_bound as u64) < M,
                "FactorialTable: modulus {M} must exceed the bound {n_bound}"
            );
            let mut fac: Vec<ModInt<M>> = Vec::with_capacity(n_bound + 1);
            fac.push(ModInt::one());
            for i in 1..=n_bound {
                fac.push(fac[i - 1] * ModInt::<M>::from(i as u64));
            }

            let mut ifac = vec![ModInt::<M>::one(); n_bound + 1];
            ifac[n_bound] = fac[n_bound].inv();
            for i in (2..=n_bound).rev() {
                ifac[i - 1] = ifac[i] * ModInt::<M>::from(i as u64);
            }

            log::debug!("FactorialTable: precomputed up to {n_bound} mod {M}");
            Self { fac, ifac }
        }

        pub fn bound(&self) -> usize {
            self.fac.len() - 1
        }

        pub fn fac(&self, n: usize) -> ModInt<M> {
            self.check(n);
            self.fac[n]
        }

        pub fn ifac(&self, n: usize) -> ModInt<M> {
            self.check(n);
            self.ifac[n]
        }

        /// `n` choose `r`, zero when `r > n`.
        pub fn comb(&self, n: usize, r: usize) -> ModInt<M> {
            if r > n {
                return ModInt::zero();
            }
            self.check(n);
            self.fac[n] * self.ifac[r] * self.ifac[n - r]
        }

        /// Ordered selections of `r` out of `n`, zero when `r > n`.
        pub fn perm(&self, n: usize, r: usize) -> ModInt<M> {
            if r > n {
                return ModInt::zero();
            }
            self.check(n);
            self.fac[n] * self.ifac[n - r]
        }

        pub fn try_comb(&self, n: usize, r: usize) -> Result<ModInt<M>> {
            if r <= n && n > self.bound() {
                return Err(Error::IndexOutOfBounds {
                    index: n,
                    len: self.fac.len(),
                });
            }
            Ok(self.comb(n, r))
        }

        fn check(&self, n: usize) {
            precondition!(
                n < self.fac.len(),
                "FactorialTable: {n} exceeds the precomputed bound {}",
                self.bound()
            );
        }
    }

}
