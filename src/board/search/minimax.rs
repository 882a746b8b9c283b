use super::eval::evaluate;
use super::SearchContext;

impl SearchContext<'_> {
    /// Plain minimax; the root color maximizes.
    pub(super) fn minimax(&mut self, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(self.position, &mut self.generator, self.root);
        }

        let moves = self.generator.generate(self.position);
        if moves.is_empty() {
            return evaluate(self.position, &mut self.generator, self.root);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for &mv in moves.iter() {
            self.position.apply(mv);
            let score = self.minimax(depth - 1, !maximizing);
            self.position.unmove();

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}
