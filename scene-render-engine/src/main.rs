use scene_render_engine::create_app;

fn main() {
    create_app().run();
}
