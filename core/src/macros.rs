/// Implements the arithmetic operators shared by two-component geometry types.
macro_rules! impl_component_ops {
    ($ty:ident, $a:ident, $b:ident) => {
        impl core::ops::Mul<f32> for $ty {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self {
                Self::new(self.$a * rhs, self.$b * rhs)
            }
        }

        impl core::ops::Div<f32> for $ty {
            type Output = Self;

            fn div(self, rhs: f32) -> Self {
                Self::new(self.$a / rhs, self.$b / rhs)
            }
        }

        impl core::ops::Neg for $ty {
            type Output = Self;

            fn neg(self) -> Self {
                Self::new(-self.$a, -self.$b)
            }
        }
    };
}
