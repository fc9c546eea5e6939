//! Preflop betting-sequence enumeration for three-handed Spin & Go.
//!
//! The crate is built around a small betting-round state machine
//! ([`betting::Round`]) and a breadth-first enumerator
//! ([`enumerate::Enumerator`]) that walks every legal line of play from the
//! first blind to the end of the round. The flat-file tooling that surrounds
//! the solver (strategy aggregation, cluster equity averaging, card feature
//! encoding) lives in [`strategy`], [`clustering`] and [`cards`].
pub mod betting;
pub mod cards;
#[cfg(feature = "cli")]
pub mod cli;
pub mod clustering;
pub mod config;
pub mod enumerate;
pub mod strategy;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and bet amounts in big blinds. Half blinds must be exact.
pub type Chips = f32;
/// Seat index around the table (0 = small blind).
pub type Position = usize;
/// Equities, averaged probabilities and other tabular reals.
pub type Probability = f64;

// ============================================================================
// GAME TREE PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 3;
/// Starting stack size in big blinds.
pub const STACK: Chips = 15.0;
/// Big blind amount.
pub const B_BLIND: Chips = 1.0;
/// Small blind amount.
pub const S_BLIND: Chips = 0.5;
/// The one raise size available in the abstraction.
pub const RAISE: Chips = 2.0;
/// Seat that posts the small blind.
pub const SB_SEAT: Position = 0;
/// Seat that posts the big blind.
pub const BB_SEAT: Position = 1;

// ============================================================================
// SEARCH LIMITS
// ============================================================================
/// Maximum number of states waiting in the search frontier.
pub const MAX_FRONTIER: usize = 1 << 20;
/// Maximum number of states the search may dequeue.
pub const MAX_VISITS: usize = 1 << 24;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
