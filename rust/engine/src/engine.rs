use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::{CardSource, Deck};
use crate::dealer::DealerOutcome;
use crate::directory::ParticipantDirectory;
use crate::errors::GameError;
use crate::game::{
    check_naturals, compare_hands, RoundOutcome, RoundPhase, Settlement, Side, Standings,
};
use crate::hand::score_cards;
use crate::logger::{RoundRecord, SeatRecord};
use crate::player::{Participant, DEALER_NAME};
use crate::rules::{Decision, DecisionRule};
use crate::session::Session;
use crate::turns::TurnSequencer;

const DEFAULT_SEED: u64 = 0xB1AC_4ACC;
/// Two cards each for the human and the dealer.
const OPENING_CARDS: usize = 4;

/// Result of a single hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Card taken, the turn goes on
    Drew { card: Card, total: u32 },
    /// Card taken and the hand went over 21; the turn is over
    Busted { card: Card, total: u32 },
    /// Nothing left to draw; the turn is over
    DeckExhausted,
}

impl HitOutcome {
    pub fn ends_turn(&self) -> bool {
        !matches!(self, HitOutcome::Drew { .. })
    }
}

/// Heads-up blackjack table: one human against the dealer.
///
/// Every round gets a freshly shuffled deck whose seed is drawn from the
/// session RNG, so a whole session replays from the engine seed.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::Engine;
/// use blackjack_engine::game::RoundPhase;
///
/// let mut engine = Engine::new("Ana", Some(42)).unwrap();
/// if engine.start_round().unwrap().is_none() {
///     engine.stand().unwrap();
///     engine.finish_round().unwrap();
/// }
/// assert_eq!(engine.phase(), RoundPhase::Settled);
/// assert_eq!(engine.standings().rounds, 1);
/// ```
#[derive(Debug)]
pub struct Engine {
    directory: ParticipantDirectory,
    turns: TurnSequencer<String>,
    deck: Deck,
    /// Session RNG; only used to derive per-round deck seeds
    rng: ChaCha20Rng,
    human: String,
    phase: RoundPhase,
    round_seed: u64,
    session: Session,
    standings: Standings,
    last_outcome: Option<RoundOutcome>,
}

fn seat_name(human: &str, side: Side) -> &str {
    match side {
        Side::Human => human,
        Side::Dealer => DEALER_NAME,
    }
}

impl Engine {
    /// Seats `human_name` against the dealer. Blank names and the dealer's own
    /// name are rejected.
    pub fn new(human_name: &str, seed: Option<u64>) -> Result<Self, GameError> {
        let name = human_name.trim();
        if name.eq_ignore_ascii_case(DEALER_NAME) {
            return Err(GameError::InvalidArgument(format!(
                "'{}' is reserved for the house",
                DEALER_NAME
            )));
        }
        let mut directory = ParticipantDirectory::new();
        directory.put(Participant::human(name))?;
        directory.put(Participant::dealer())?;

        let seed = seed.unwrap_or(DEFAULT_SEED);
        Ok(Self {
            directory,
            turns: TurnSequencer::new(),
            deck: Deck::new_with_seed(seed),
            rng: ChaCha20Rng::seed_from_u64(seed),
            human: name.to_string(),
            phase: RoundPhase::Idle,
            round_seed: seed,
            session: Session::new(),
            standings: Standings::default(),
            last_outcome: None,
        })
    }

    /// Shuffles a fresh deck and deals the opening hands.
    ///
    /// Returns `Some` when a natural settled the round on the spot.
    pub fn start_round(&mut self) -> Result<Option<RoundOutcome>, GameError> {
        self.ensure_no_round()?;
        let seed: u64 = self.rng.random();
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        self.round_seed = seed;
        self.start_round_with_deck(deck)
    }

    /// Like [`start_round`](Self::start_round) but deals from `deck` as given.
    /// The recorded round seed is left untouched.
    ///
    /// A deck too short for the opening deal is rejected before any state
    /// changes, so the previous round stays intact.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<Option<RoundOutcome>, GameError> {
        self.ensure_no_round()?;
        if deck.remaining() < OPENING_CARDS {
            debug!(remaining = deck.remaining(), "deck too short for the opening deal");
            return Err(GameError::DeckExhausted);
        }
        self.deck = deck;
        self.session = Session::new();
        self.last_outcome = None;
        self.directory.require_mut(&self.human)?.reset_hand();
        self.directory.require_mut(DEALER_NAME)?.reset_hand();

        for _ in 0..2 {
            for side in [Side::Human, Side::Dealer] {
                if self.deal_to(side)?.is_none() {
                    return Err(GameError::DeckExhausted);
                }
            }
        }
        self.turns
            .start_round([self.human.clone(), DEALER_NAME.to_string()]);
        info!(
            round = self.standings.rounds + 1,
            seed = self.round_seed,
            "round started"
        );

        let naturals = check_naturals(
            self.directory.require(&self.human)?.hand(),
            self.directory.require(DEALER_NAME)?.hand(),
        );
        if let Some(settlement) = naturals {
            return self.settle(settlement, None).map(Some);
        }
        self.phase = RoundPhase::PlayerTurn;
        Ok(None)
    }

    /// Deals one card to the human. A bust or an empty deck ends the turn.
    pub fn hit(&mut self) -> Result<HitOutcome, GameError> {
        self.expect_turn(Side::Human)?;
        if self.directory.require(&self.human)?.hand().is_planted() {
            return Err(GameError::HandAlreadyPlanted(self.human.clone()));
        }
        let Some(card) = self.deal_to(Side::Human)? else {
            debug!("deck exhausted during player turn");
            self.end_player_turn();
            return Ok(HitOutcome::DeckExhausted);
        };
        let hand = self.directory.require(&self.human)?.hand();
        let total = hand.total();
        if hand.is_bust() {
            self.end_player_turn();
            return Ok(HitOutcome::Busted { card, total });
        }
        Ok(HitOutcome::Drew { card, total })
    }

    /// Plants the human's hand and passes the turn to the dealer.
    pub fn stand(&mut self) -> Result<u32, GameError> {
        self.expect_turn(Side::Human)?;
        let player = self.directory.require_mut(&self.human)?;
        player.hand_mut().plant();
        let total = player.hand().total();
        self.end_player_turn();
        Ok(total)
    }

    /// Plays the dealer's turn (skipped when the human busted) and settles.
    pub fn finish_round(&mut self) -> Result<RoundOutcome, GameError> {
        self.expect_turn(Side::Dealer)?;
        let human_bust = self.directory.require(&self.human)?.hand().is_bust();
        let dealer_turn = if human_bust {
            None
        } else {
            let dealer = self.directory.require_mut(DEALER_NAME)?;
            let automaton = dealer.automaton().unwrap_or_default();
            let before = dealer.hand().len();
            let outcome = automaton.play_turn(dealer, &mut self.deck);
            let cards = dealer.hand().cards();
            for (i, card) in cards.iter().enumerate().skip(before) {
                self.session
                    .record(DEALER_NAME, *card, score_cards(cards.iter().take(i + 1)));
            }
            Some(outcome)
        };
        let settlement = compare_hands(
            self.directory.require(&self.human)?.hand(),
            self.directory.require(DEALER_NAME)?.hand(),
        );
        self.settle(settlement, dealer_turn)
    }

    /// Plays a whole round with the human following the dealer's own rule.
    pub fn autoplay_round(&mut self) -> Result<RoundOutcome, GameError> {
        if let Some(outcome) = self.start_round()? {
            return Ok(outcome);
        }
        let rule = DecisionRule;
        while self.phase == RoundPhase::PlayerTurn {
            let total = self.directory.require(&self.human)?.hand().total();
            match rule.decide(total) {
                Decision::Draw => {
                    self.hit()?;
                }
                Decision::Stand => {
                    self.stand()?;
                }
            }
        }
        self.finish_round()
    }

    fn ensure_no_round(&self) -> Result<(), GameError> {
        match self.phase {
            RoundPhase::PlayerTurn | RoundPhase::DealerTurn => {
                Err(GameError::RoundAlreadyInProgress)
            }
            RoundPhase::Idle | RoundPhase::Settled => Ok(()),
        }
    }

    fn expect_turn(&self, side: Side) -> Result<(), GameError> {
        if matches!(self.phase, RoundPhase::Idle | RoundPhase::Settled) {
            return Err(GameError::RoundNotInProgress);
        }
        let expected = seat_name(&self.human, side);
        match self.turns.current() {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(GameError::NotParticipantsTurn {
                expected: expected.to_string(),
                actual: actual.clone(),
            }),
            None => Err(GameError::RoundNotInProgress),
        }
    }

    fn deal_to(&mut self, side: Side) -> Result<Option<Card>, GameError> {
        let Some(card) = self.deck.draw() else {
            return Ok(None);
        };
        let participant = self.directory.require_mut(seat_name(&self.human, side))?;
        participant.receive(card);
        self.session
            .record(participant.name(), card, participant.hand().total());
        Ok(Some(card))
    }

    fn end_player_turn(&mut self) {
        self.turns.advance();
        self.phase = RoundPhase::DealerTurn;
    }

    fn settle(
        &mut self,
        settlement: Settlement,
        dealer_turn: Option<DealerOutcome>,
    ) -> Result<RoundOutcome, GameError> {
        let outcome = RoundOutcome {
            settlement,
            human_total: self.directory.require(&self.human)?.hand().total(),
            dealer_total: self.directory.require(DEALER_NAME)?.hand().total(),
            dealer_turn,
        };
        let winner = match outcome.winner() {
            Some(side) => {
                let p = self.directory.require_mut(seat_name(&self.human, side))?;
                p.record_win();
                match side {
                    Side::Human => self.standings.human_wins += 1,
                    Side::Dealer => self.standings.dealer_wins += 1,
                }
                Some(p.name().to_string())
            }
            None => None,
        };
        self.standings.rounds += 1;
        while self.turns.advance().is_some() {}
        self.session.settle(outcome, winner);
        self.phase = RoundPhase::Settled;
        self.last_outcome = Some(outcome);
        info!(
            round = self.standings.rounds,
            %settlement,
            human_total = outcome.human_total,
            dealer_total = outcome.dealer_total,
            "round settled"
        );
        Ok(outcome)
    }

    pub fn human(&self) -> Result<&Participant, GameError> {
        self.directory.require(&self.human)
    }

    pub fn dealer(&self) -> Result<&Participant, GameError> {
        self.directory.require(DEALER_NAME)
    }

    pub fn human_name(&self) -> &str {
        &self.human
    }

    /// Whoever is due to act, if a round is underway.
    pub fn current_participant(&self) -> Option<&Participant> {
        self.turns.current().and_then(|name| self.directory.get(name))
    }

    pub fn directory(&self) -> &ParticipantDirectory {
        &self.directory
    }

    pub fn turns(&self) -> &TurnSequencer<String> {
        &self.turns
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn round_seed(&self) -> u64 {
        self.round_seed
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn standings(&self) -> Standings {
        self.standings
    }

    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    /// Snapshot of the last settled round, ready for the history log.
    pub fn round_record(&self, round_id: String) -> Option<RoundRecord> {
        let outcome = self.last_outcome?;
        let seat = |p: &Participant| SeatRecord {
            name: p.name().to_string(),
            total: p.hand().total(),
            cards: p.hand().cards().iter().map(Card::short).collect(),
        };
        Some(RoundRecord {
            round_id,
            seed: self.round_seed,
            human: seat(self.directory.get(&self.human)?),
            dealer: seat(self.directory.get(DEALER_NAME)?),
            settlement: outcome.settlement,
            winner: self.session.winner().map(str::to_string),
            plays: self.session.history().into_iter().cloned().collect(),
            ts: None,
        })
    }
}
