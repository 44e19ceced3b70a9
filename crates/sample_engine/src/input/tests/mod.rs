//! Frame-cycle scenarios exercising the dispatcher with recording subscribers

mod frame_cycle;
