use tracing::warn;

use super::player::{PieceColor, Player};
use crate::error::SetupError;

/// Check a pair of color selections and build the ordered player pair.
///
/// Both colors must be present and distinct; no session may be created
/// otherwise.
pub fn validate_colors(
    first: Option<PieceColor>,
    second: Option<PieceColor>,
) -> Result<[Player; 2], SetupError> {
    let (Some(first), Some(second)) = (first, second) else {
        warn!(?first, ?second, "color selection incomplete");
        return Err(SetupError::MissingColor);
    };

    if first == second {
        warn!(color = %first, "both players picked the same color");
        return Err(SetupError::DuplicateColor);
    }

    Ok([Player::new(first), Player::new(second)])
}
