// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;

/// How well the user recalled an item. Stored as the integers 1 to 4.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];

    pub fn value(self) -> u8 {
        match self {
            Rating::Again => 1,
            Rating::Hard => 2,
            Rating::Good => 3,
            Rating::Easy => 4,
        }
    }

    /// Good and Easy count towards the repetition streak.
    pub fn is_success(self) -> bool {
        self.value() >= 3
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Again => "Again",
            Rating::Hard => "Hard",
            Rating::Good => "Good",
            Rating::Easy => "Easy",
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = ErrorReport;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::Again),
            2 => Ok(Rating::Hard),
            3 => Ok(Rating::Good),
            4 => Ok(Rating::Easy),
            _ => Err(ErrorReport::InvalidRating(value)),
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = ErrorReport;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::try_from(i64::from(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.value()
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> f64 {
        f64::from(rating.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_valid_ratings() -> Fallible<()> {
        for (n, expected) in (1..=4).zip(Rating::ALL) {
            assert_eq!(Rating::try_from(n as i64)?, expected);
            assert_eq!(expected.value(), n);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_ratings() {
        for n in [0_i64, 5, -1, 100] {
            assert_eq!(Rating::try_from(n), Err(ErrorReport::InvalidRating(n)));
        }
    }

    #[test]
    fn test_success_threshold() {
        assert!(!Rating::Again.is_success());
        assert!(!Rating::Hard.is_success());
        assert!(Rating::Good.is_success());
        assert!(Rating::Easy.is_success());
    }

    #[test]
    fn test_serialized_as_integer() -> Fallible<()> {
        assert_eq!(serde_json::to_string(&Rating::Good)?, "3");
        let rating: Rating = serde_json::from_str("1")?;
        assert_eq!(rating, Rating::Again);
        assert!(serde_json::from_str::<Rating>("9").is_err());
        Ok(())
    }
}
