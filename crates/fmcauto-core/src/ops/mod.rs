// ── Resource operations ──
//
// Each operation composes name resolution and one or more requests into
// a complete cycle. Writes report `(status, body)` as an `ApiResponse`
// whatever the status; only transport failures and unresolvable names
// come back as errors.

mod nat;
mod objects;
mod system;
