mod preview_dto;

pub use preview_dto::{PreviewPlanDto, PreviewQuery, UnlockResponseDto};
