use super::GameController;

impl GameController {
    /// Opens a new day: resets the day ledger, grants AP to every living tank,
    /// then pays out gold mine income.
    pub fn start_of_turn(&mut self) {
        self.rules.on_start_of_day();

        let (ap, max_ap) = (self.rules.ap_per_turn(), self.rules.max_ap());
        for tank in self.tanks.iter_mut().filter(|tank| tank.is_alive()) {
            tank.gain_ap(ap, max_ap);
        }

        for mine in &self.gold_mines {
            let award = mine.award_gold(&mut self.tanks);
            if award > 0 {
                tracing::debug!(award, spaces = mine.spaces().len(), "gold mine paid out");
            }
        }
    }
}
