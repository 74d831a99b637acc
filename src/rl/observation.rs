use burn::tensor::{backend::Backend, Tensor, TensorData};

use crate::game::{Cell, EpisodeState, GRID_SIZE};

/// Create a 4-channel observation tensor from episode state
///
/// Channels:
/// - 0: Free space (1.0 where the cell has no obstacle)
/// - 1: Agent position (1.0 at the agent's cell)
/// - 2: Target cells (1.0 at every target)
/// - 3: Visited cells (1.0 at every cell visited this episode)
///
/// The tensor is rebuilt from scratch on every call, so it always reflects
/// the current state. Returns: Tensor<B, 3> with shape [4, 8, 8].
pub fn create_observation<B: Backend>(state: &EpisodeState, device: &B::Device) -> Tensor<B, 3> {
    let free_channel = create_free_channel(state, device);
    let agent_channel = create_agent_channel(state, device);
    let target_channel = create_target_channel(state, device);
    let visited_channel = create_visited_channel(state, device);

    // Each channel is [8, 8]; stacking along dim 0 gives [4, 8, 8]
    Tensor::stack(
        vec![free_channel, agent_channel, target_channel, visited_channel],
        0,
    )
}

/// Channel with free space (1.0 where free, 0.0 at obstacles)
fn create_free_channel<B: Backend>(state: &EpisodeState, device: &B::Device) -> Tensor<B, 2> {
    let mut data = vec![0.0; GRID_SIZE * GRID_SIZE];

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if state.level.cell(row, col) == Cell::Free {
                data[row * GRID_SIZE + col] = 1.0;
            }
        }
    }

    let tensor_data = TensorData::new(data, [GRID_SIZE, GRID_SIZE]);

    Tensor::<B, 2>::from_data(tensor_data, device)
}

/// Channel with the agent position (1.0 at the agent, 0.0 elsewhere)
fn create_agent_channel<B: Backend>(state: &EpisodeState, device: &B::Device) -> Tensor<B, 2> {
    let mut data = vec![0.0; GRID_SIZE * GRID_SIZE];

    let pos = state.agent_pos;
    data[(pos.row as usize) * GRID_SIZE + pos.col as usize] = 1.0;

    let tensor_data = TensorData::new(data, [GRID_SIZE, GRID_SIZE]);

    Tensor::<B, 2>::from_data(tensor_data, device)
}

/// Channel with target cells (1.0 at every target, 0.0 elsewhere)
fn create_target_channel<B: Backend>(state: &EpisodeState, device: &B::Device) -> Tensor<B, 2> {
    let mut data = vec![0.0; GRID_SIZE * GRID_SIZE];

    for target in state.level.targets() {
        data[(target.row as usize) * GRID_SIZE + target.col as usize] = 1.0;
    }

    let tensor_data = TensorData::new(data, [GRID_SIZE, GRID_SIZE]);

    Tensor::<B, 2>::from_data(tensor_data, device)
}

/// Channel with visited cells (1.0 at every visited cell, 0.0 elsewhere)
fn create_visited_channel<B: Backend>(state: &EpisodeState, device: &B::Device) -> Tensor<B, 2> {
    let mut data = vec![0.0; GRID_SIZE * GRID_SIZE];

    for visited in &state.visited {
        data[(visited.row as usize) * GRID_SIZE + visited.col as usize] = 1.0;
    }

    let tensor_data = TensorData::new(data, [GRID_SIZE, GRID_SIZE]);

    Tensor::<B, 2>::from_data(tensor_data, device)
}
