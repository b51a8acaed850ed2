use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Users::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Phone).string_len(32).null())
                    .col(ColumnDef::new(Users::Country).string_len(100).null())
                    .col(ColumnDef::new(Users::City).string_len(100).null())
                    .col(ColumnDef::new(Users::ProfilePicture).text().null())
                    .col(ColumnDef::new(Users::CoverPicture).text().null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(20)
                            .not_null()
                            .default("other"),
                    )
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::Investor).json_binary().null())
                    .col(ColumnDef::new(Users::Startup).json_binary().null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================
        // INDEXES
        // ============================================

        // Candidate narrowing: role plus section presence
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_role_startup
                ON users (role)
                WHERE startup IS NOT NULL;

                CREATE INDEX idx_users_role_investor
                ON users (role)
                WHERE investor IS NOT NULL;
                "#,
            )
            .await?;

        // Containment lookups on the profile sections
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_startup_gin
                ON users USING GIN (startup jsonb_path_ops);

                CREATE INDEX idx_users_investor_gin
                ON users USING GIN (investor jsonb_path_ops);
                "#,
            )
            .await?;

        // ============================================
        // TRIGGER FOR updated_at
        // ============================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_users_updated_at
                BEFORE UPDATE ON users
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_users_updated_at ON users")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_users_role_startup;
                DROP INDEX IF EXISTS idx_users_role_investor;
                DROP INDEX IF EXISTS idx_users_startup_gin;
                DROP INDEX IF EXISTS idx_users_investor_gin;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Country,
    City,
    ProfilePicture,
    CoverPicture,
    Role,
    PasswordHash,
    Investor,
    Startup,
    CreatedAt,
    UpdatedAt,
}
