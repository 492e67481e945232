//! Room placement and corridor chaining
//!
//! Fixed-size rooms dropped by rejection sampling, then joined in creation
//! order by L-shaped corridors.

use rand::Rng;

use crate::data::GameConfig;
use crate::world::geometry::{Corridor, Room};

/// Place up to `room_count` non-overlapping rooms.
///
/// Each room gets `placement_attempts` overlap-checked samples, then exactly one
/// more sample that is kept only if it happens not to overlap. A crowded
/// dungeon can therefore end up with fewer rooms than requested; the first
/// room always lands because nothing can overlap it.
pub fn place_rooms(rng: &mut impl Rng, config: &GameConfig) -> Vec<Room> {
    let size = config.room_size;
    let (min_rooms, max_rooms) = config.room_count;
    let wanted = rng.gen_range(min_rooms..=max_rooms);

    let mut rooms: Vec<Room> = Vec::with_capacity(wanted as usize);

    for index in 0..wanted {
        let mut placed = false;

        for _ in 0..config.placement_attempts {
            let candidate = sample_room(rng, config, rooms.len());
            if !rooms.iter().any(|r| r.overlaps(&candidate)) {
                rooms.push(candidate);
                placed = true;
                break;
            }
        }

        if !placed {
            let candidate = sample_room(rng, config, rooms.len());
            if rooms.iter().any(|r| r.overlaps(&candidate)) {
                log::debug!("Dropped room {} after {} attempts", index, config.placement_attempts + 1);
            } else {
                rooms.push(candidate);
            }
        }
    }

    log::debug!("Placed {} of {} requested {}x{} rooms", rooms.len(), wanted, size, size);
    rooms
}

/// Sample a room whose top-left lies in `[0, extent - size - 1]` on each axis
fn sample_room(rng: &mut impl Rng, config: &GameConfig, id: usize) -> Room {
    let size = config.room_size;
    let x = rng.gen_range(0..=config.dungeon_width - size - 1);
    let y = rng.gen_range(0..=config.dungeon_height - size - 1);
    Room::new(x, y, size, size, id)
}

/// Chain consecutive rooms with one horizontal and one vertical leg each.
///
/// The horizontal leg runs along room `i`'s center row, the vertical leg along
/// room `i + 1`'s center column; they meet at `(center(i+1).x, center(i).y)`.
/// Fewer than two rooms yield no corridors.
pub fn connect_rooms(rooms: &[Room]) -> Vec<Corridor> {
    rooms
        .windows(2)
        .flat_map(|pair| {
            let from = pair[0].center();
            let to = pair[1].center();
            [
                Corridor::horizontal(from.x, to.x, from.y),
                Corridor::vertical(from.y, to.y, to.x),
            ]
        })
        .collect()
}
