//! Conversion between [`SalesSummaryDto`] and the persisted [`SalesSummary`].

use salesboard_db::models::sales_summary::SalesSummary;

use crate::dto::SalesSummaryDto;

/// Field-for-field mapping between the wire and storage representations.
pub struct SalesSummaryMapper;

impl SalesSummaryMapper {
    pub fn to_entity(dto: SalesSummaryDto) -> SalesSummary {
        SalesSummary {
            id: dto.id,
            product_name: dto.product_name,
            region: dto.region,
            period_start: dto.period_start,
            period_end: dto.period_end,
            units_sold: dto.units_sold,
            revenue_cents: dto.revenue_cents,
        }
    }

    pub fn to_dto(entity: SalesSummary) -> SalesSummaryDto {
        SalesSummaryDto {
            id: entity.id,
            product_name: entity.product_name,
            region: entity.region,
            period_start: entity.period_start,
            period_end: entity.period_end,
            units_sold: entity.units_sold,
            revenue_cents: entity.revenue_cents,
        }
    }

    pub fn to_dto_list(entities: Vec<SalesSummary>) -> Vec<SalesSummaryDto> {
        entities.into_iter().map(Self::to_dto).collect()
    }
}
