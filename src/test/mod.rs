pub mod test_util;
mod test_tunnels;
mod test_lasers;
