/// The attachment acceptance policy shared by the submission form and the
/// models that carry staged files to the API.
mod attachment;
/// Constant `true` / `false` marker types used by the response envelope.
mod bools;
/// Geo locations and the coordinate bounds every form validates against.
mod geo_location;
/// Pagination query and response types.
mod paginated;
/// The success / error envelope every API response is wrapped in.
mod response;

pub use self::{attachment::*, bools::*, geo_location::*, paginated::*, response::*};
