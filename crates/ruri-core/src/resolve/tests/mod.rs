//! Resolution tests (split by reference shape and by property).

use super::resolve;
