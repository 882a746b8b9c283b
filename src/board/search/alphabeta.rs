use super::eval::evaluate;
use super::SearchContext;

impl SearchContext<'_> {
    /// Fail-hard alpha-beta over the same tree as [`SearchContext::minimax`].
    ///
    /// The result is clamped to `[alpha, beta]`; inside the window it is the
    /// exact minimax value.
    pub(super) fn alpha_beta(
        &mut self,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(self.position, &mut self.generator, self.root).clamp(alpha, beta);
        }

        let moves = self.generator.generate(self.position);
        if moves.is_empty() {
            return evaluate(self.position, &mut self.generator, self.root).clamp(alpha, beta);
        }

        for &mv in moves.iter() {
            self.position.apply(mv);
            let score = self.alpha_beta(depth - 1, alpha, beta, !maximizing);
            self.position.unmove();

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        if maximizing {
            alpha
        } else {
            beta
        }
    }
}
