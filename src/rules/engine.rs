//! The turn/action state machine.
//!
//! Three transitions move a dealt game forward: playing a card, choosing
//! a color after a wild, and drawing. Each takes `&self` and returns a
//! complete successor `Game`; a failed transition returns an error and
//! the caller still holds the untouched snapshot.
//!
//! Turn state is entirely the action queue plus the turn pointer
//! (`active_player_idx`) and the direction flag. The pointer is *not*
//! advanced while a mandatory-draw obligation is being served; when the
//! last owed card is drawn, play resumes at whoever the pointer was left
//! on when the attack was played.

use smallvec::{smallvec, SmallVec};

use im::Vector;

use crate::cards::{AttackKind, Card, CardId, Color};
use crate::core::{EngineError, GameRng, PlayerId, Rejection, StateFault};
use crate::state::{CurrentColor, Game, NextAction};

/// Step an index around the table, wrapping in either direction.
fn step_idx(idx: usize, step: isize, player_count: usize) -> usize {
    let count = player_count as isize;
    (((idx as isize + step) % count + count) % count) as usize
}

impl Game {
    /// +1 in normal rotation, -1 while reversed.
    fn turn_step(&self) -> isize {
        if self.reverse_direction {
            -1
        } else {
            1
        }
    }

    /// The id of the player `step` seats away from the turn pointer.
    fn player_id_at_step(&self, step: isize) -> PlayerId {
        self.players[step_idx(self.active_player_idx, step, self.players.len())]
            .id
            .clone()
    }

    /// Where the turn pointer lands after `card` is played.
    ///
    /// In a two-player game an attack or draw-four leaves the pointer in
    /// place: there is no third seat to pass to, the lone opponent eats
    /// the consequence and play returns. A reverse flips the direction
    /// and steps in the *new* effective direction; everything else steps
    /// one seat along the current direction.
    fn advanced_idx(&self, card: &Card) -> usize {
        if self.players.len() == 2 && (card.is_attack() || card.is_draw_four()) {
            return self.active_player_idx;
        }
        if card.is_reverse() {
            // Flip first, then step in the new effective direction.
            return step_idx(self.active_player_idx, -self.turn_step(), self.players.len());
        }
        step_idx(self.active_player_idx, self.turn_step(), self.players.len())
    }

    /// The obligations queued by playing `card`, computed against the
    /// pre-play state.
    fn consequent_actions(&self, card: &Card) -> SmallVec<[NextAction; 2]> {
        let forward = self.turn_step();
        match card {
            Card::Attack { attack: AttackKind::DrawTwo, .. } => smallvec![NextAction::DrawTwo {
                player: self.player_id_at_step(forward),
                cards_left: 2,
            }],
            // Skip and reverse are fully encoded in how the pointer
            // advances; the victim simply never receives an obligation.
            Card::Number { .. } | Card::Attack { .. } => smallvec![NextAction::Play {
                player: self.players[self.advanced_idx(card)].id.clone(),
            }],
            Card::Wild { .. } => smallvec![NextAction::ChooseColor {
                player: self.active_player().id.clone(),
            }],
            Card::DrawFour { .. } => smallvec![
                NextAction::ChooseColor {
                    player: self.active_player().id.clone(),
                },
                NextAction::DrawFour {
                    player: self.player_id_at_step(forward),
                    cards_left: 4,
                },
            ],
        }
    }

    /// Play a card from the active player's hand.
    ///
    /// Legality against the base card is the caller's duty (consult
    /// [`can_play_card`](crate::rules::can_play_card) first); this
    /// transition only verifies possession. A missing card is a
    /// [`StateFault`], not a user rejection: the caller submitted an
    /// intent against a state it did not have.
    ///
    /// Emptying the hand wins the game: the queue collapses to a single
    /// `finished` entry and the turn pointer freezes.
    pub fn play_card(&self, card_id: &CardId) -> Result<Game, EngineError> {
        if self.is_finished() {
            return Err(Rejection::GameFinished.into());
        }

        let active_id = self.active_player().id.clone();
        let mut hand = self.hand(&active_id).cloned().unwrap_or_default();
        let Some(pos) = hand.iter().position(|c| c.id() == card_id) else {
            return Err(StateFault::CardNotInHand {
                player: active_id,
                card: card_id.clone(),
            }
            .into());
        };
        let card = hand.remove(pos);
        let won = hand.is_empty();

        let mut next = self.clone();
        next.player_hands.insert(active_id.clone(), hand);
        next.discard.push_back(card.clone());
        next.current_color = match card.color() {
            Some(color) => CurrentColor::Color(color),
            None => CurrentColor::Any,
        };
        if card.is_reverse() {
            next.reverse_direction = !self.reverse_direction;
        }
        if won {
            next.next_actions = Vector::unit(NextAction::Finished { player: active_id });
        } else {
            next.active_player_idx = self.advanced_idx(&card);
            next.next_actions = self.consequent_actions(&card).into_iter().collect();
        }
        Ok(next)
    }

    /// Resolve a pending color choice.
    ///
    /// Removes the player's `choose-color` obligation and installs the
    /// chosen color. When that empties the queue (a lone wild with no
    /// concurrent draw obligation), the player at the turn pointer is
    /// given a `play` obligation.
    pub fn choose_color(&self, player: &PlayerId, color: Color) -> Result<Game, EngineError> {
        if self.is_finished() {
            return Err(Rejection::GameFinished.into());
        }

        let mut remaining: Vector<NextAction> = Vector::new();
        let mut found = false;
        for action in &self.next_actions {
            match action {
                NextAction::ChooseColor { player: owner } if owner == player => found = true,
                _ => remaining.push_back(action.clone()),
            }
        }
        if !found {
            return Err(StateFault::NoPendingChooseColor(player.clone()).into());
        }

        let mut next = self.clone();
        next.current_color = CurrentColor::Color(color);
        next.next_actions = if remaining.is_empty() {
            Vector::unit(NextAction::Play {
                player: self.active_player().id.clone(),
            })
        } else {
            remaining
        };
        Ok(next)
    }

    /// Draw the next card from the draw pile into `player`'s hand.
    ///
    /// Gated by [`can_draw_card`](Game::can_draw_card): only the owner of
    /// the head obligation may draw, and never while holding a playable
    /// card against a `play` obligation.
    ///
    /// Serving a mandatory draw decrements `cards_left` and re-queues the
    /// obligation until it reaches zero; an ordinary forced-pass draw
    /// ends the turn immediately (the drawn card is not playable this
    /// turn). When the draw pile runs low the discard is recycled into
    /// it, keeping only the base card.
    pub fn draw_card(&self, player: &PlayerId, rng: &mut GameRng) -> Result<Game, EngineError> {
        if self.is_finished() {
            return Err(Rejection::GameFinished.into());
        }
        if !self.can_draw_card(player) {
            return Err(Rejection::CannotDraw(player.clone()).into());
        }

        let pos = self
            .next_actions
            .iter()
            .position(|a| a.player() == player && a.is_drawable())
            .ok_or_else(|| StateFault::NoDrawableAction(player.clone()))?;

        let mut next = self.clone();
        let action = next.next_actions.remove(pos);
        let card = next
            .draw_pile
            .pop_front()
            .ok_or(StateFault::DrawPileExhausted)?;
        let mut hand = next.hand(player).cloned().unwrap_or_default();
        hand.push_back(card);
        next.player_hands.insert(player.clone(), hand);

        match action {
            NextAction::DrawTwo { player: owner, cards_left } => {
                let remaining = cards_left - 1;
                if remaining > 0 {
                    next.next_actions.push_back(NextAction::DrawTwo {
                        player: owner,
                        cards_left: remaining,
                    });
                } else if next.next_actions.is_empty() {
                    next.next_actions.push_back(NextAction::Play {
                        player: self.active_player().id.clone(),
                    });
                }
            }
            NextAction::DrawFour { player: owner, cards_left } => {
                let remaining = cards_left - 1;
                if remaining > 0 {
                    next.next_actions.push_back(NextAction::DrawFour {
                        player: owner,
                        cards_left: remaining,
                    });
                } else if next.next_actions.is_empty() {
                    next.next_actions.push_back(NextAction::Play {
                        player: self.active_player().id.clone(),
                    });
                }
            }
            NextAction::Play { .. } => {
                // Turn passes: a forced pass never plays the drawn card.
                let idx = step_idx(self.active_player_idx, self.turn_step(), self.players.len());
                next.active_player_idx = idx;
                next.next_actions.push_back(NextAction::Play {
                    player: self.players[idx].id.clone(),
                });
            }
            NextAction::ChooseColor { .. } | NextAction::Finished { .. } => {
                return Err(StateFault::NoDrawableAction(player.clone()).into());
            }
        }

        next.recycle_discard(rng);
        Ok(next)
    }

    /// Replenish the draw pile from the discard when it runs low.
    ///
    /// Everything below the base card is shuffled onto the back of the
    /// draw pile; the discard keeps only the base card. A discard with
    /// nothing below the base card leaves both piles as they are.
    fn recycle_discard(&mut self, rng: &mut GameRng) {
        if self.draw_pile.len() >= 2 {
            return;
        }
        let Some(base) = self.discard.back().cloned() else {
            return;
        };
        let spare = self.discard.take(self.discard.len() - 1);
        self.draw_pile.append(rng.shuffle_vector(spare));
        self.discard = Vector::unit(base);
    }
}
