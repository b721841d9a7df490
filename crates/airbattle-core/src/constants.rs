//! Game constants and targeting tuning parameters.

// --- Airplane shape ---

/// Distinct cells in one airplane (1 head, 3 body, 4 wing, 2 tail).
pub const PLANE_CELL_COUNT: usize = 10;

// --- Board ---

/// Smallest board a custom game may use.
pub const MIN_BOARD_SIZE: i32 = 10;

/// Largest board a custom game may use.
pub const MAX_BOARD_SIZE: i32 = 20;

/// Maximum fraction of the board airplanes may occupy.
pub const MAX_OCCUPANCY: f64 = 0.40;

/// Random placement attempts per airplane (floor; scaled by fleet size).
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Full-fleet redeploy attempts before random placement gives up.
pub const PLACEMENT_RETRIES: usize = 10;

// --- Phase thresholds ---

/// Below this many candidates the engine is in Kill.
pub const KILL_CANDIDATE_THRESHOLD: usize = 5;

/// Active hits that force Kill.
pub const KILL_ACTIVE_HITS: usize = 2;

/// Below this many candidates the engine is at least in Lock.
pub const LOCK_CANDIDATE_THRESHOLD: usize = 50;

/// Active hits that force at least Lock.
pub const LOCK_ACTIVE_HITS: usize = 1;

// --- Prober ---

/// The prober only runs while more candidates than this survive.
pub const PROBE_MIN_CANDIDATES: usize = 20;

// --- Heat map ---

/// Base vote a candidate casts for its head cell.
pub const HEAT_HEAD_BASE: f64 = 15.0;

/// Head bonus when the head sits on a board corner.
pub const HEAT_CORNER_BONUS: f64 = 80.0;

/// Head bonus when the head sits on a board edge (not a corner).
pub const HEAT_EDGE_BONUS: f64 = 50.0;

/// Head bonus when the head is near the board centre.
pub const HEAT_CENTER_BONUS: f64 = 20.0;

/// Manhattan radius around the board centre that earns the centre bonus.
pub const HEAT_CENTER_RADIUS: f64 = 2.0;

/// Head bonus per active hit near the head.
pub const HEAT_NEAR_HIT_BONUS: f64 = 200.0;

/// Manhattan radius for the near-hit bonus.
pub const HEAT_NEAR_HIT_RADIUS: i32 = 3;

/// Head penalty per recorded miss adjacent to the head.
pub const HEAT_NEAR_MISS_PENALTY: f64 = 5.0;

/// Manhattan radius for the near-miss penalty.
pub const HEAT_NEAR_MISS_RADIUS: i32 = 1;

/// Vote for each body cell.
pub const HEAT_BODY_WEIGHT: f64 = 1.0;

/// Vote for each wing or tail cell.
pub const HEAT_EXTREMITY_WEIGHT: f64 = 0.5;

// --- Information gain ---

/// Score per surviving candidate whose head is at the cell.
pub const INFO_HEAD_BONUS: u64 = 50;

// --- Direct targeting ---

/// Direct targeting takes over at or below this many candidates.
pub const DIRECT_TARGET_MAX_CANDIDATES: usize = 3;

pub const PRIORITY_HEAD: u32 = 1000;
pub const PRIORITY_BODY: u32 = 100;
pub const PRIORITY_EXTREMITY: u32 = 10;
