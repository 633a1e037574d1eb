mod particle_ops;
mod occupancy;
