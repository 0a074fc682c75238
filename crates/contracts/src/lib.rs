//! Wire types shared between the dashboard and the network API.

pub mod system;
