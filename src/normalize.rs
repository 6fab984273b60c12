pub const PERCENT: f64 = 100.0;

pub trait Normalize {
    fn normalize(self) -> Self;
}

// rescales the values into percentages that add up to 100. only a total that is zero (or not a
// finite number) has no meaningful shares, so every value gets an equal share instead. tiny
// positive totals still divide
impl Normalize for Vec<f64> {
    fn normalize(self) -> Self {
        if self.is_empty() {
            return self;
        }
        let total = self.iter().sum::<f64>();
        if !(total.is_finite() && total > 0.0) {
            let share = PERCENT / self.len() as f64;
            return vec![share; self.len()];
        }
        self.into_iter().map(|x| x / total * PERCENT).collect()
    }
}
