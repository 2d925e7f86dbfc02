/// Stopping rule for bisection over `f64`.
///
/// Real-domain searches never wait for exact equality. They stop once the
/// bracket is at most `eps` wide or after `max_iter` halvings, whichever
/// comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealSearch {
    pub eps: f64,
    pub max_iter: u32,
}

impl Default for RealSearch {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_iter: 200,
        }
    }
}

impl RealSearch {
    pub fn new(eps: f64, max_iter: u32) -> Self {
        Self { eps, max_iter }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err("eps must be finite and positive");
        }
        if self.max_iter == 0 {
            return Err("max_iter must be positive");
        }
        Ok(())
    }
}
