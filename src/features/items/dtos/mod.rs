mod item_dto;

pub use item_dto::{
    ConsumeItemDto, CreateItemDto, DashboardDto, DashboardQuery, ExpiringQuery, ExpiryCheckDto,
    ItemResponseDto, UpdateItemDto,
};
