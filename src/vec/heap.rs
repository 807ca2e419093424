// Invariants for the heap backend:
// - `0 <= len <= capacity` always holds.
// - `capacity == buf.len()`; `capacity == 0` means `buf` owns no allocation.
// - Elements in `buf[..len]` are the logical contents.
// - Elements in `buf[len..capacity]` are valid `T` values that must never be
//   observed through the public API; they are overwritten or reset before
//   being exposed again.
// - All public methods maintain these invariants.

mod clone;
mod erase;
mod extend;
mod from;
mod grow;
mod insert;
mod new;
mod pop;
mod push;
mod resize;
mod slice;
