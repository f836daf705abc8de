use std::cell::Cell;
use std::rc::Rc;

use bjsolo::{ActionError, Card, GameSession, RoundState, SessionOptions, TableView};
use js_sys::Function;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Delay before the bet control comes back after a round ends.
const REBET_DELAY_MS: i32 = 2000;

const WAIT_NOTICE: &str = "Please wait for the next round.";

#[wasm_bindgen]
pub struct WasmSession {
    session: GameSession,
    notice: Option<&'static str>,
    rebet: RebetTimer,
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        console_error_panic_hook::set_once();
        init_logging();

        Self {
            session: GameSession::new(SessionOptions::default(), u64::from(seed)),
            notice: None,
            rebet: RebetTimer::new(),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.rebet.cancel();
        self.rebet.bet_enabled.set(true);
        self.session = GameSession::new(SessionOptions::default(), u64::from(seed));
        self.notice = None;
    }

    /// Called with no arguments whenever the bet control is re-enabled.
    pub fn set_on_change(&mut self, callback: Option<Function>) {
        self.rebet.on_change = callback;
    }

    /// Places a bet. Rejections are reported through the snapshot message
    /// rather than thrown.
    pub fn place_bet(&mut self, amount: i32) -> Result<JsValue, JsValue> {
        if !self.rebet.bet_enabled.get() {
            self.notice = Some(WAIT_NOTICE);
            return self.snapshot();
        }

        match self.session.place_bet(i64::from(amount)) {
            Ok(()) => {
                self.rebet.cancel();
                self.rebet.bet_enabled.set(false);
                self.notice = None;
            }
            Err(err) => self.notice = Some(err.notice()),
        }
        self.snapshot()
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.session.hit().map(|_| ());
        self.after_action(outcome)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.session.stand().map(|_| ());
        self.after_action(outcome)
    }

    /// Cancels a pending re-enable of the bet control.
    pub fn cancel_rebet(&mut self) {
        self.rebet.cancel();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let mut view = self.session.view();
        if let Some(notice) = self.notice {
            view = view.with_message(notice);
        }
        let snapshot = Snapshot::new(&view, self.rebet.bet_enabled.get() && view.can_bet);
        to_js_value(&snapshot)
    }
}

impl WasmSession {
    /// Applies a hit or stand. Rejections are reported through the snapshot
    /// message, the same way bet rejections are.
    fn after_action(&mut self, outcome: Result<(), ActionError>) -> Result<JsValue, JsValue> {
        let follow_up = FollowUp::after_action(outcome, &self.session);

        self.notice = follow_up.notice;
        if follow_up.enable_bet {
            self.rebet.bet_enabled.set(true);
        }
        if follow_up.schedule_rebet {
            self.rebet.schedule(REBET_DELAY_MS)?;
        }
        self.snapshot()
    }
}

/// What the adapter does once a hit or stand has run.
#[derive(Debug, PartialEq, Eq)]
struct FollowUp {
    notice: Option<&'static str>,
    enable_bet: bool,
    schedule_rebet: bool,
}

impl FollowUp {
    fn after_action(outcome: Result<(), ActionError>, session: &GameSession) -> Self {
        match outcome {
            Ok(()) => Self {
                notice: None,
                enable_bet: false,
                schedule_rebet: session.state() == RoundState::Resolved
                    && !session.is_bankrupt(),
            },
            Err(err) => {
                log::warn!("action rejected: {err}");
                Self {
                    notice: Some(err.notice()),
                    enable_bet: matches!(err, ActionError::EmptyDeck(_)),
                    schedule_rebet: false,
                }
            }
        }
    }
}

/// Re-enables betting after a fixed delay. Cancelled by a new bet or reset.
struct RebetTimer {
    bet_enabled: Rc<Cell<bool>>,
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
    on_change: Option<Function>,
}

impl RebetTimer {
    fn new() -> Self {
        Self {
            bet_enabled: Rc::new(Cell::new(true)),
            handle: None,
            callback: None,
            on_change: None,
        }
    }

    fn schedule(&mut self, delay_ms: i32) -> Result<(), JsValue> {
        self.cancel();

        let enabled = Rc::clone(&self.bet_enabled);
        let on_change = self.on_change.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            enabled.set(true);
            if let Some(on_change) = &on_change {
                if let Err(err) = on_change.call0(&JsValue::NULL) {
                    log::warn!("on_change callback failed: {err:?}");
                }
            }
        });

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms,
        )?;

        self.handle = Some(handle);
        self.callback = Some(callback);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
        self.callback = None;
    }
}

impl Drop for RebetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    player_cards: Vec<JsCard>,
    dealer_cards: Vec<Option<JsCard>>,
    player_total: u8,
    dealer_total: u8,
    bankroll: f64,
    bankroll_delta: f64,
    wins: u32,
    losses: u32,
    message: &'static str,
    can_act: bool,
    bet_enabled: bool,
}

impl Snapshot {
    fn new(view: &TableView, bet_enabled: bool) -> Self {
        Self {
            state: state_to_str(view.state),
            player_cards: view.player_cards.iter().copied().map(card_to_js).collect(),
            dealer_cards: view
                .dealer_cards
                .iter()
                .map(|card| card.map(card_to_js))
                .collect(),
            player_total: view.player_total,
            dealer_total: view.dealer_total,
            bankroll: js_amount(view.bankroll),
            bankroll_delta: js_amount(view.bankroll_delta),
            wins: view.wins,
            losses: view.losses,
            message: view.message,
            can_act: view.can_act,
            bet_enabled,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    symbol: char,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
        symbol: card.suit.symbol(),
    }
}

fn suit_to_str(suit: bjsolo::Suit) -> &'static str {
    match suit {
        bjsolo::Suit::Hearts => "Hearts",
        bjsolo::Suit::Diamonds => "Diamonds",
        bjsolo::Suit::Clubs => "Clubs",
        bjsolo::Suit::Spades => "Spades",
    }
}

fn state_to_str(state: RoundState) -> &'static str {
    match state {
        RoundState::Betting => "Betting",
        RoundState::PlayerTurn => "PlayerTurn",
        RoundState::DealerTurn => "DealerTurn",
        RoundState::Resolved => "Resolved",
    }
}

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

/// JS numbers are doubles; amounts beyond 2^53 lose precision but keep
/// their sign and magnitude.
fn js_amount(amount: i64) -> f64 {
    amount as f64
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
