pub mod utils {
    pub mod camera;
    pub mod debug_functions;
    pub mod game_functions;
    pub mod global_inputs;
    pub mod macros;
    pub mod objects;
    pub mod pointer_inputs;
    pub mod setup;
    pub mod systems_logic;
}
