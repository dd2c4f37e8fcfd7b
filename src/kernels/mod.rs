//! Pure, stateless codec kernels. Each kernel operates on a plain byte slice
//! and knows nothing about chunking, threading, or the container format.

pub mod rle;
