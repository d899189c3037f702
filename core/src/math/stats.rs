/// Least-squares line fitted through one scatter pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

pub struct StatsHelper;

impl StatsHelper {
    /// Fits `y = slope * x + intercept`. Returns `None` for mismatched or
    /// sub-two-point inputs, or when the x values carry no spread.
    pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LineFit> {
        if xs.len() < 2 || xs.len() != ys.len() {
            return None;
        }

        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (&x, &y) in xs.iter().zip(ys) {
            sxx += (x - mean_x) * (x - mean_x);
            sxy += (x - mean_x) * (y - mean_y);
        }
        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        Some(LineFit {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Population standard deviation of the residuals against a fitted line.
    pub fn residual_sigma(xs: &[f64], ys: &[f64], fit: LineFit) -> f64 {
        if xs.is_empty() || xs.len() != ys.len() {
            return 0.0;
        }

        let sum_sq: f64 = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| {
                let residual = y - (fit.slope * x + fit.intercept);
                residual * residual
            })
            .sum();
        (sum_sq / xs.len() as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_recovers_exact_line() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [3.0, 5.0, 7.0, 9.0];
        let fit = StatsHelper::linear_fit(&xs, &ys).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!(StatsHelper::residual_sigma(&xs, &ys, fit) < 1e-12);
    }

    #[test]
    fn fit_needs_two_points_and_spread() {
        assert!(StatsHelper::linear_fit(&[], &[]).is_none());
        assert!(StatsHelper::linear_fit(&[1.0], &[2.0]).is_none());
        assert!(StatsHelper::linear_fit(&[2.0, 2.0], &[1.0, 3.0]).is_none());
        assert!(StatsHelper::linear_fit(&[1.0, 2.0], &[1.0]).is_none());
    }

    #[test]
    fn sigma_measures_scatter_around_trend() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, -1.0, 1.0, -1.0];
        let fit = LineFit {
            slope: 0.0,
            intercept: 0.0,
        };
        assert_eq!(StatsHelper::residual_sigma(&xs, &ys, fit), 1.0);
    }
}
