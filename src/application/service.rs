//! Service facade: the single contract the web layer consumes.

use std::sync::Arc;

use crate::application::dtos::{
    CreateProductRequest, ProductListResponse, ProductResponse, UpdateProductRequest,
};
use crate::application::use_cases::{
    CreateProductUseCase, DeleteProductUseCase, GetAllProductsUseCase, GetProductByIdUseCase,
    UpdateProductUseCase,
};
use crate::domain::repositories::ProductRepository;
use crate::error::Result;

/// Bundles the five use cases behind one object so handlers hold a single
/// state entry.
pub struct ProductService {
    create: CreateProductUseCase,
    get_by_id: GetProductByIdUseCase,
    get_all: GetAllProductsUseCase,
    update: UpdateProductUseCase,
    delete: DeleteProductUseCase,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            create: CreateProductUseCase::new(repository.clone()),
            get_by_id: GetProductByIdUseCase::new(repository.clone()),
            get_all: GetAllProductsUseCase::new(repository.clone()),
            update: UpdateProductUseCase::new(repository.clone()),
            delete: DeleteProductUseCase::new(repository),
        }
    }

    pub async fn create_product(&self, request: CreateProductRequest) -> Result<ProductResponse> {
        self.create.execute(request).await
    }

    pub async fn get_product_by_id(&self, id: &str) -> Result<ProductResponse> {
        self.get_by_id.execute(id).await
    }

    pub async fn get_all_products(&self) -> Result<ProductListResponse> {
        self.get_all.execute().await
    }

    pub async fn update_product(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> Result<ProductResponse> {
        self.update.execute(id, request).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<()> {
        self.delete.execute(id).await
    }
}
