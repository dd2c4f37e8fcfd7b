// In: src/chunk_pipeline/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Chunk Pipeline
// ====================================================================================
//
// The chunk pipeline is the concurrent heart of the codec. It never touches
// files or the container format; it turns one in-memory byte buffer into
// another.
//
// Data Flow (Encode):
//
//   1. [Planner]       -> splits [0, len) into one ChunkRange per worker
//   2. [Orchestrator]  -> spawns one scoped thread per range, each running the
//                         pure RLE kernel over its own slice of the source
//   3. [Orchestrator]  -> joins all workers, concatenates the per-chunk output
//                         slots strictly in plan order
//
// Decode mirrors encode, with two differences: the plan is computed over
// (value, count) pairs so a chunk boundary can never split a record, and any
// worker reporting a malformed chunk fails the whole operation after every
// worker has finished.
//
// ====================================================================================
pub mod orchestrator;
pub mod planner;
