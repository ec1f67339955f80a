//! Primitive data types.

/// Data type for row and column indices.
pub type Index = usize;
/// Data type for measuring path costs.
pub type Cost = u64;
/// Data type for the amount of fuel in the tank.
pub type FuelLevel = u8;

/// Capacity of the fuel tank. Refueling always fills up to this level.
pub const MAX_FUEL: FuelLevel = 9;
/// Cost of a single move in a cardinal direction.
pub const MOVE_COST: Cost = 5;
/// Cost of refueling at a station.
pub const REFUEL_COST: Cost = 15;
