use crate::traits::FloatScalar;

/// Cubic Hermite basis at local coordinate `t ∈ [0, 1]` (extrapolates
/// outside).
///
/// Returns `[h00, h10, h01, h11]`:
/// `h00 = 2t³ - 3t² + 1`, `h10 = t³ - 2t² + t`,
/// `h01 = -2t³ + 3t²`, `h11 = t³ - t²`.
///
/// A segment of width `h` with end values `y0, y1` and slopes `d0, d1` is
/// `h00·y0 + h10·h·d0 + h01·y1 + h11·h·d1`.
#[inline]
pub(crate) fn basis<T: FloatScalar>(t: T) -> [T; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let two = T::one() + T::one();
    let three = two + T::one();
    [
        two * t3 - three * t2 + T::one(),
        t3 - two * t2 + t,
        three * t2 - two * t3,
        t3 - t2,
    ]
}

/// Derivative of [`basis`] with respect to `t`.
///
/// Divide by the segment width to get the derivative in `x`.
#[inline]
pub(crate) fn basis_derivative<T: FloatScalar>(t: T) -> [T; 4] {
    let t2 = t * t;
    let two = T::one() + T::one();
    let three = two + T::one();
    let four = two + two;
    let six = three + three;
    [
        six * t2 - six * t,
        three * t2 - four * t + T::one(),
        six * t - six * t2,
        three * t2 - two * t,
    ]
}

/// Weights of one axis of a Hermite cell.
///
/// For a query falling in segment `index`, the interpolated value is
/// `Σ_k value[k]·f[index + k] + slope[k]·df[index + k]` over `k < count`.
/// The segment width is folded into `slope`. A single-knot axis has
/// `count == 1` and acts as a constant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AxisWeights<T> {
    pub index: usize,
    pub count: usize,
    pub value: [T; 2],
    pub slope: [T; 2],
}

impl<T: FloatScalar> AxisWeights<T> {
    pub(crate) fn locate(knots: &[T], x: T) -> Self {
        if knots.len() < 2 {
            return Self {
                index: 0,
                count: 1,
                value: [T::one(), T::zero()],
                slope: [T::zero(); 2],
            };
        }
        let i = super::find_interval(knots, x);
        let h = knots[i + 1] - knots[i];
        let t = (x - knots[i]) / h;
        let [h00, h10, h01, h11] = basis(t);
        Self {
            index: i,
            count: 2,
            value: [h00, h01],
            slope: [h10 * h, h11 * h],
        }
    }
}
