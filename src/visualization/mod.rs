pub mod planets_vis2d;
