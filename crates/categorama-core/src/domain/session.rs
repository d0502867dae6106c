//! Game Session
//!
//! Everything one browser tab plays with: the letter, the timer, the
//! category list and the small bits of UI-relevant state around them.
//! The UI keeps one of these in its store and calls into it from event
//! handlers.

use rand::Rng;

use super::category::{Category, CategoryList};
use super::error::{DomainError, DomainResult};
use super::game::{GamePhase, TickOutcome, Timer};
use super::random::random_letter;
use super::share_token::ShareToken;
use crate::config::GameConfig;

pub const MIN_VISIBLE: usize = 1;
pub const MAX_VISIBLE: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    letter: char,
    timer: Timer,
    categories: CategoryList,
    visible_count: usize,
    /// Categories were edited since the last load or save
    unsaved: bool,
    /// Between the two halves of a reset
    restarting: bool,
    /// Token of the list currently shown, if it came from a shared document
    share_token: Option<ShareToken>,
}

impl GameSession {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        Self {
            letter: random_letter(rng),
            timer: Timer::new(config.duration_secs),
            categories: CategoryList::new(),
            visible_count: config.visible_count.clamp(MIN_VISIBLE, MAX_VISIBLE),
            unsaved: false,
            restarting: false,
            share_token: None,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn phase(&self) -> GamePhase {
        self.timer.phase()
    }

    pub fn categories(&self) -> &CategoryList {
        &self.categories
    }

    pub fn visible_categories(&self) -> &[Category] {
        self.categories.visible(self.visible_count)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn is_restarting(&self) -> bool {
        self.restarting
    }

    pub fn share_token(&self) -> Option<&ShareToken> {
        self.share_token.as_ref()
    }

    // ========================
    // Timer
    // ========================

    pub fn toggle(&mut self) -> GamePhase {
        self.timer.toggle()
    }

    pub fn start(&mut self) -> bool {
        self.timer.start()
    }

    pub fn pause(&mut self) -> bool {
        self.timer.pause()
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick();
        if outcome == TickOutcome::Expired {
            log::info!("Round over, timer restored to {}s", self.timer.duration());
        }
        outcome
    }

    /// Apply text from the duration form. Bad input is logged and the
    /// previous duration stays in place.
    pub fn set_duration_input(&mut self, input: &str) -> DomainResult<u32> {
        let result = Timer::parse_duration(input).and_then(|secs| {
            self.timer.set_duration(secs)?;
            Ok(secs)
        });
        if let Err(e) = &result {
            log::warn!("Rejected duration input: {}", e);
        }
        result
    }

    pub fn reroll_letter<R: Rng + ?Sized>(&mut self, rng: &mut R) -> DomainResult<char> {
        if self.timer.is_playing() {
            return Err(DomainError::InvalidInput(
                "letter can only change while paused".to_string(),
            ));
        }
        self.letter = random_letter(rng);
        Ok(self.letter)
    }

    // ========================
    // Reset
    // ========================

    /// First half of a reset: stop the clock and flag the transition.
    pub fn begin_reset(&mut self) {
        self.timer.pause();
        self.restarting = true;
    }

    /// Second half of a reset, run after the transition delay: new letter,
    /// reshuffled list, configured duration back on the clock.
    pub fn finish_reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.timer.restore();
        self.letter = random_letter(rng);
        self.categories.shuffle(rng);
        self.restarting = false;
    }

    // ========================
    // Categories
    // ========================

    pub fn add_category<R: Rng + ?Sized>(&mut self, label: &str, rng: &mut R) -> DomainResult<Category> {
        let added = self.categories.prepend(label, rng)?.clone();
        self.unsaved = true;
        Ok(added)
    }

    pub fn remove_category(&mut self, id: &str) -> bool {
        let removed = self.categories.remove(id);
        if removed {
            self.unsaved = true;
        }
        removed
    }

    pub fn increase_visible(&mut self) -> usize {
        self.visible_count = (self.visible_count + 1).min(MAX_VISIBLE);
        self.visible_count
    }

    pub fn decrease_visible(&mut self) -> usize {
        self.visible_count = self.visible_count.saturating_sub(1).max(MIN_VISIBLE);
        self.visible_count
    }

    // ========================
    // Persistence bookkeeping
    // ========================

    /// Swap in a freshly loaded list. Clears the unsaved flag.
    pub fn replace_categories(&mut self, categories: CategoryList, token: Option<ShareToken>) {
        self.categories = categories;
        self.share_token = token;
        self.unsaved = false;
    }

    pub fn mark_saved(&mut self, token: ShareToken) {
        self.share_token = Some(token);
        self.unsaved = false;
    }

    /// A failed save only hides the save prompt
    pub fn mark_save_failed(&mut self) {
        self.unsaved = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> (GameSession, StdRng) {
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = GameSession::new(&GameConfig::default(), &mut rng);
        let list: CategoryList = (0..15)
            .map(|i| Category::new(format!("id{:02}", i), format!("Category {}", i)))
            .collect();
        session.replace_categories(list, None);
        (session, rng)
    }

    #[test]
    fn test_new_session_defaults() {
        let (session, _) = session();
        assert_eq!(session.phase(), GamePhase::Paused);
        assert_eq!(session.timer().remaining(), 120);
        assert_eq!(session.visible_count(), 12);
        assert_eq!(session.visible_categories().len(), 12);
        assert!(session.letter().is_ascii_uppercase());
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_reset_restores_duration_and_permutes() {
        let (mut session, mut rng) = session();
        let before = session.categories().clone();
        session.set_duration_input("45").unwrap();
        session.start();
        session.tick();
        session.tick();

        session.begin_reset();
        assert!(session.is_restarting());
        assert_eq!(session.phase(), GamePhase::Paused);

        session.finish_reset(&mut rng);
        assert!(!session.is_restarting());
        assert_eq!(session.timer().remaining(), 45);
        assert!(session.categories().same_entries(&before));
        assert_eq!(session.categories().len(), before.len());
    }

    #[test]
    fn test_bad_duration_keeps_previous() {
        let (mut session, _) = session();
        assert!(session.set_duration_input("abc").is_err());
        assert_eq!(session.timer().duration(), 120);

        session.start();
        assert!(session.set_duration_input("30").is_err());
        assert_eq!(session.timer().duration(), 120);
    }

    #[test]
    fn test_reroll_only_while_paused() {
        let (mut session, mut rng) = session();
        assert!(session.reroll_letter(&mut rng).is_ok());
        session.start();
        assert!(session.reroll_letter(&mut rng).is_err());
    }

    #[test]
    fn test_edits_mark_unsaved() {
        let (mut session, mut rng) = session();
        assert!(!session.remove_category("missing"));
        assert!(!session.has_unsaved_changes());

        assert!(session.add_category("   ", &mut rng).is_err());
        assert!(!session.has_unsaved_changes());

        let added = session.add_category("Famous painters", &mut rng).unwrap();
        assert!(session.has_unsaved_changes());
        assert_eq!(session.categories().as_slice()[0], added);

        session.mark_save_failed();
        assert!(!session.has_unsaved_changes());

        assert!(session.remove_category(&added.id));
        assert!(session.has_unsaved_changes());

        let token: ShareToken = "Ab12Cd3".parse().unwrap();
        session.mark_saved(token.clone());
        assert!(!session.has_unsaved_changes());
        assert_eq!(session.share_token(), Some(&token));
    }

    #[test]
    fn test_visible_count_bounds() {
        let (mut session, _) = session();
        for _ in 0..200 {
            session.decrease_visible();
        }
        assert_eq!(session.visible_count(), MIN_VISIBLE);
        for _ in 0..200 {
            session.increase_visible();
        }
        assert_eq!(session.visible_count(), MAX_VISIBLE);
        assert_eq!(session.visible_categories().len(), 15);
    }
}
